use chrono::{DateTime, Utc};

use tb_domain::{Role, Turn};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Conversation session
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One client's ordered turn history and running cost.
///
/// Turns are append-only; `reset` is the single mutation entry point that
/// removes anything. Both history clearing and cost zeroing happen inside
/// one `&mut self` call, so a reader can never observe a partial reset.
#[derive(Debug)]
pub struct ConversationSession {
    turns: Vec<Turn>,
    total_cost: f64,
    created_at: DateTime<Utc>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            total_cost: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Append a turn. Never fails.
    pub fn append_turn(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    /// Record usage for the most recent turn: adds `token_count *
    /// cost_per_token` to the running total and annotates that turn with
    /// its token count and cost. Accounting is purely additive and
    /// monotonic until the next reset.
    pub fn record_usage(&mut self, token_count: u32, cost_per_token: f64) {
        let cost = f64::from(token_count) * cost_per_token;
        self.total_cost += cost;
        if let Some(turn) = self.turns.last_mut() {
            turn.token_count = Some(token_count);
            turn.cost = Some(cost);
        }
    }

    /// Clear the turn history and zero the accumulated cost.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.total_cost = 0.0;
        self.created_at = Utc::now();
    }

    /// Read-only view of the turns in insertion order.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_keep_insertion_order() {
        let mut session = ConversationSession::new();
        session.append_turn(Role::User, "hi");
        session.append_turn(Role::Assistant, "Hello!");
        session.append_turn(Role::User, "what is recursion?");

        let roles: Vec<Role> = session.history().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(session.history()[2].text, "what is recursion?");
    }

    #[test]
    fn usage_accumulates_and_annotates_latest_turn() {
        let mut session = ConversationSession::new();
        session.append_turn(Role::Assistant, "answer one");
        session.record_usage(1000, 0.000_002);
        session.append_turn(Role::Assistant, "answer two");
        session.record_usage(500, 0.000_002);

        assert!((session.total_cost() - 0.003).abs() < 1e-12);
        assert_eq!(session.history()[0].token_count, Some(1000));
        assert_eq!(session.history()[1].token_count, Some(500));
    }

    #[test]
    fn record_usage_on_empty_session_still_accumulates() {
        let mut session = ConversationSession::new();
        session.record_usage(100, 0.01);
        assert!((session.total_cost() - 1.0).abs() < 1e-12);
        assert!(session.is_empty());
    }

    #[test]
    fn reset_clears_turns_and_cost_together() {
        let mut session = ConversationSession::new();
        for _ in 0..2 {
            session.append_turn(Role::User, "q");
            session.append_turn(Role::Assistant, "a");
        }
        session.record_usage(40_000, 0.000_002);
        assert_eq!(session.history().len(), 4);
        assert!((session.total_cost() - 0.08).abs() < 1e-12);

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.total_cost(), 0.0);
    }
}
