#![no_std]

multiversx_sc::imports!();

pub mod tally;
pub mod types;

use types::{Proposal, Voter, WorkflowStatus, WorkflowTransition};

// ============================================================
// Constants
// ============================================================

/// Sentinel proposal seeded at id 0 when proposal registration opens
pub const GENESIS_DESCRIPTION: &[u8] = b"GENESIS";

/// Proposal ids start at 0, the underlying VecMapper at 1.
/// Callers bound-check `proposal_id` against the mapper length first.
fn proposal_index(proposal_id: u64) -> usize {
    proposal_id as usize + 1
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Voting {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.administrator().set(&deployer);
        self.workflow_status().set(WorkflowStatus::RegisteringVoters);
        self.winning_proposal_id().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addVoter
    // Administrator whitelists an address while registration is open.
    // ========================================================

    #[endpoint(addVoter)]
    fn add_voter(&self, address: ManagedAddress) {
        self.restricted_to_administrator();
        require!(
            self.workflow_status().get() == WorkflowStatus::RegisteringVoters,
            "Voters registration is not open yet"
        );
        require!(
            !self.voter_record(&address).is_registered,
            "Already registered"
        );

        let voter = Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        };
        self.voters(&address).set(&voter);
        self.voter_addresses().insert(address.clone());

        self.voter_registered_event(&address);
    }

    // ========================================================
    // ENDPOINT: startProposalsRegistering
    // Opens submissions and seeds GENESIS at id 0.
    // ========================================================

    #[endpoint(startProposalsRegistering)]
    fn start_proposals_registering(&self) {
        self.restricted_to_administrator();
        self.advance_workflow(WorkflowTransition::StartProposalsRegistering);

        let genesis = Proposal {
            description: ManagedBuffer::from(GENESIS_DESCRIPTION),
            vote_count: 0,
        };
        self.proposals().push(&genesis);
    }

    // ========================================================
    // ENDPOINT: addProposal
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(&self, description: ManagedBuffer) -> u64 {
        self.require_registered_voter();
        require!(
            self.workflow_status().get() == WorkflowStatus::ProposalsRegistrationStarted,
            "Proposals are not allowed yet"
        );
        require!(
            !description.is_empty(),
            "Vous ne pouvez pas ne rien proposer"
        );

        let proposal_id = self.proposals().len() as u64;
        let proposal = Proposal {
            description,
            vote_count: 0,
        };
        self.proposals().push(&proposal);

        self.proposal_registered_event(proposal_id);

        proposal_id
    }

    #[endpoint(endProposalsRegistering)]
    fn end_proposals_registering(&self) {
        self.restricted_to_administrator();
        self.advance_workflow(WorkflowTransition::EndProposalsRegistering);
    }

    #[endpoint(startVotingSession)]
    fn start_voting_session(&self) {
        self.restricted_to_administrator();
        self.advance_workflow(WorkflowTransition::StartVotingSession);
    }

    // ========================================================
    // ENDPOINT: setVote
    // One vote per registered voter. GENESIS is a valid target.
    // ========================================================

    #[endpoint(setVote)]
    fn set_vote(&self, proposal_id: u64) {
        let caller = self.require_registered_voter();
        require!(
            self.workflow_status().get() == WorkflowStatus::VotingSessionStarted,
            "Voting session havent started yet"
        );

        let mut voter = self.voter_record(&caller);
        require!(!voter.has_voted, "You have already voted");
        require!(
            proposal_id < self.proposals().len() as u64,
            "Proposal not found"
        );

        let index = proposal_index(proposal_id);
        let mut proposal = self.proposals().get(index);
        proposal.vote_count += 1;
        self.proposals().set(index, &proposal);

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        self.voters(&caller).set(&voter);

        self.voted_event(&caller, proposal_id);
    }

    #[endpoint(endVotingSession)]
    fn end_voting_session(&self) {
        self.restricted_to_administrator();
        self.advance_workflow(WorkflowTransition::EndVotingSession);
    }

    // ========================================================
    // ENDPOINT: tallyVotes
    // Scans proposals in id order; lowest id wins ties.
    // ========================================================

    #[endpoint(tallyVotes)]
    fn tally_votes(&self) {
        self.restricted_to_administrator();
        self.advance_workflow(WorkflowTransition::TallyVotes);

        let winner = tally::leading_proposal(
            self.proposals().iter().map(|proposal| proposal.vote_count),
        );
        self.winning_proposal_id().set(winner);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn restricted_to_administrator(&self) {
        let caller = self.blockchain().get_caller();
        if caller != self.administrator().get() {
            let caller_bytes = caller.as_managed_buffer().clone();
            sc_panic!("Unauthorized caller: {:x}", caller_bytes);
        }
    }

    /// Returns the caller once it is known to be a whitelisted voter.
    fn require_registered_voter(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(
            self.voter_record(&caller).is_registered,
            "You're not a voter"
        );
        caller
    }

    // ========================================================
    // INTERNAL: workflow
    // Every phase change goes through the transition table.
    // ========================================================

    fn advance_workflow(&self, transition: WorkflowTransition) {
        let previous = self.workflow_status().get();
        let phase_error = transition.phase_error();
        require!(previous == transition.from_status(), phase_error);

        let next = transition.to_status();
        self.workflow_status().set(next);
        self.workflow_status_change_event(previous, next);
    }

    // ========================================================
    // INTERNAL: record access
    // ========================================================

    fn voter_record(&self, address: &ManagedAddress) -> Voter {
        let mapper = self.voters(address);
        if mapper.is_empty() {
            Voter::default()
        } else {
            mapper.get()
        }
    }

    /// VecMapper raises the same message for indexes past its end, but
    /// `proposal_id as usize` truncates on 32-bit targets and could land on
    /// a valid slot, so the id is checked in its u64 form first.
    fn proposal_at(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposals().len() as u64,
            "index out of range"
        );
        self.proposals().get(proposal_index(proposal_id))
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getVoter)]
    fn get_voter(&self, address: ManagedAddress) -> Voter {
        self.require_registered_voter();
        self.voter_record(&address)
    }

    #[view(getOneProposal)]
    fn get_one_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_registered_voter();
        self.proposal_at(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.require_registered_voter();
        let mut result = MultiValueEncoded::new();
        let total = self.proposals().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_id in from..end {
            result.push(self.proposals().get(proposal_index(proposal_id)));
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.require_registered_voter();
        self.proposals().len() as u64
    }

    #[view(getVoters)]
    fn get_voters(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_registered_voter();
        let mut result = MultiValueEncoded::new();
        let total = self.voter_addresses().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for position in from..end {
            result.push(self.voter_addresses().get_by_index(position as usize + 1));
        }
        result
    }

    #[view(getVoterCount)]
    fn get_voter_count(&self) -> u64 {
        self.require_registered_voter();
        self.voter_addresses().len() as u64
    }

    /// `winningProposalID` reads 0 both before tallying and when GENESIS won;
    /// this tells the two apart.
    #[view(isTallied)]
    fn is_tallied(&self) -> bool {
        self.workflow_status().get() == WorkflowStatus::VotesTallied
    }

    #[view(getWinningProposal)]
    fn get_winning_proposal(&self) -> MultiValue2<u64, Proposal<Self::Api>> {
        self.require_registered_voter();
        require!(self.is_tallied(), "Votes have not been tallied yet");

        let winner = self.winning_proposal_id().get();
        (winner, self.proposal_at(winner)).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter: &ManagedAddress);

    #[event("proposalRegistered")]
    fn proposal_registered_event(&self, #[indexed] proposal_id: u64);

    #[event("voted")]
    fn voted_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] proposal_id: u64);

    #[event("workflowStatusChange")]
    fn workflow_status_change_event(
        &self,
        #[indexed] previous_status: WorkflowStatus,
        #[indexed] new_status: WorkflowStatus,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Administration ──

    #[view(owner)]
    #[storage_mapper("administrator")]
    fn administrator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(workflowStatus)]
    #[storage_mapper("workflowStatus")]
    fn workflow_status(&self) -> SingleValueMapper<WorkflowStatus>;

    #[view(winningProposalID)]
    #[storage_mapper("winningProposalId")]
    fn winning_proposal_id(&self) -> SingleValueMapper<u64>;

    // ── Voters ──

    #[storage_mapper("voters")]
    fn voters(&self, address: &ManagedAddress) -> SingleValueMapper<Voter>;

    #[storage_mapper("voterAddresses")]
    fn voter_addresses(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;
}
