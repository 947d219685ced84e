use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::game::GameState;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..actions.len());
        Some(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Outcome, Side};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::with_seed(3);
        let mut state = GameState::default();
        for _ in 0..6 {
            state.apply_move_mut(2).unwrap();
        }
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::new(Side::PlayerOne);

        loop {
            let agent = if state.current_player() == Side::PlayerOne {
                &mut agent1
            } else {
                &mut agent2
            };
            match agent.select_action(&state) {
                Some(action) => {
                    state.apply_move_mut(action).unwrap();
                }
                None => break,
            }
        }

        assert!(state.is_terminal());
        assert_ne!(state.outcome(), Outcome::NoWinYet);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let state = GameState::default();
        let mut a = RandomAgent::with_seed(11);
        let mut b = RandomAgent::with_seed(11);
        for _ in 0..20 {
            assert_eq!(a.select_action(&state), b.select_action(&state));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
