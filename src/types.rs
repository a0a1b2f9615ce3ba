multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Workflow Status — the six ballot phases, strictly in order
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum WorkflowStatus {
    /// Initial phase. The administrator whitelists voters.
    RegisteringVoters,
    /// Registered voters submit proposals. GENESIS sits at id 0.
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    /// Registered voters cast their single vote.
    VotingSessionStarted,
    VotingSessionEnded,
    /// Winner computed. Terminal state.
    VotesTallied,
}

// ============================================================
// Workflow Transition — the only legal moves between phases
// ============================================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum WorkflowTransition {
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl WorkflowTransition {
    /// Phase the ballot must be in for this transition to apply.
    pub fn from_status(self) -> WorkflowStatus {
        match self {
            WorkflowTransition::StartProposalsRegistering => WorkflowStatus::RegisteringVoters,
            WorkflowTransition::EndProposalsRegistering => {
                WorkflowStatus::ProposalsRegistrationStarted
            },
            WorkflowTransition::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowTransition::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            WorkflowTransition::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    pub fn to_status(self) -> WorkflowStatus {
        match self {
            WorkflowTransition::StartProposalsRegistering => {
                WorkflowStatus::ProposalsRegistrationStarted
            },
            WorkflowTransition::EndProposalsRegistering => {
                WorkflowStatus::ProposalsRegistrationEnded
            },
            WorkflowTransition::StartVotingSession => WorkflowStatus::VotingSessionStarted,
            WorkflowTransition::EndVotingSession => WorkflowStatus::VotingSessionEnded,
            WorkflowTransition::TallyVotes => WorkflowStatus::VotesTallied,
        }
    }

    /// Error raised when the current phase does not match `from_status`.
    pub fn phase_error(self) -> &'static str {
        match self {
            WorkflowTransition::StartProposalsRegistering => {
                "Registering proposals cant be started now"
            },
            WorkflowTransition::EndProposalsRegistering => {
                "Registering proposals havent started yet"
            },
            WorkflowTransition::StartVotingSession => {
                "Registering proposals phase is not finished"
            },
            WorkflowTransition::EndVotingSession => "Voting session havent started yet",
            WorkflowTransition::TallyVotes => "Current status is not voting session ended",
        }
    }
}

// ============================================================
// Voter — one record per whitelisted address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Default, PartialEq, Debug)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set.
    pub voted_proposal_id: u64,
}

// ============================================================
// Proposal — positional id, append-only
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    pub vote_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSITIONS: [WorkflowTransition; 5] = [
        WorkflowTransition::StartProposalsRegistering,
        WorkflowTransition::EndProposalsRegistering,
        WorkflowTransition::StartVotingSession,
        WorkflowTransition::EndVotingSession,
        WorkflowTransition::TallyVotes,
    ];

    #[test]
    fn transitions_chain_from_registering_voters_to_votes_tallied() {
        let mut status = WorkflowStatus::RegisteringVoters;
        for transition in TRANSITIONS {
            assert_eq!(transition.from_status(), status);
            status = transition.to_status();
        }
        assert_eq!(status, WorkflowStatus::VotesTallied);
    }

    #[test]
    fn each_transition_advances_by_exactly_one_phase() {
        for transition in TRANSITIONS {
            let from = transition.from_status() as u8;
            let to = transition.to_status() as u8;
            assert_eq!(to, from + 1);
        }
    }

    #[test]
    fn no_transition_leaves_votes_tallied() {
        assert!(TRANSITIONS
            .iter()
            .all(|t| t.from_status() != WorkflowStatus::VotesTallied));
    }
}
