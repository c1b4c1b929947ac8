//! Closed set of valid bettors and contestants.

use std::collections::HashSet;

use super::error::{InvalidOrderError, ValidationError};
use super::id::ParticipantId;
use super::order::FinishingOrder;

/// Bettor and contestant lists supplied by configuration.
///
/// Insertion order is kept for display; lookups go through hash sets.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    bettors: Vec<ParticipantId>,
    contestants: Vec<ParticipantId>,
    bettor_set: HashSet<ParticipantId>,
    contestant_set: HashSet<ParticipantId>,
}

impl Roster {
    /// Build a roster from separate bettor and contestant lists.
    ///
    /// Duplicate names are collapsed, keeping the first occurrence.
    pub fn new<B, C>(bettors: B, contestants: C) -> Self
    where
        B: IntoIterator,
        B::Item: Into<ParticipantId>,
        C: IntoIterator,
        C::Item: Into<ParticipantId>,
    {
        let (bettors, bettor_set) = dedup(bettors);
        let (contestants, contestant_set) = dedup(contestants);
        Self {
            bettors,
            contestants,
            bettor_set,
            contestant_set,
        }
    }

    /// Build a roster where every participant both bets and competes.
    pub fn shared<I>(participants: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ParticipantId>,
    {
        let (list, set) = dedup(participants);
        Self {
            bettors: list.clone(),
            contestants: list,
            bettor_set: set.clone(),
            contestant_set: set,
        }
    }

    #[must_use]
    pub fn bettors(&self) -> &[ParticipantId] {
        &self.bettors
    }

    #[must_use]
    pub fn contestants(&self) -> &[ParticipantId] {
        &self.contestants
    }

    #[must_use]
    pub fn is_bettor(&self, id: &ParticipantId) -> bool {
        self.bettor_set.contains(id)
    }

    #[must_use]
    pub fn is_contestant(&self, id: &ParticipantId) -> bool {
        self.contestant_set.contains(id)
    }

    /// Reject bettors not on the roster.
    pub fn check_bettor(&self, id: &ParticipantId) -> Result<(), ValidationError> {
        if self.is_bettor(id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownBettor { name: id.clone() })
        }
    }

    /// Reject contestants not on the roster.
    pub fn check_contestant(&self, id: &ParticipantId) -> Result<(), ValidationError> {
        if self.is_contestant(id) {
            Ok(())
        } else {
            Err(ValidationError::UnknownContestant { name: id.clone() })
        }
    }

    /// Reject finishing orders that place someone off the roster.
    pub fn check_order(&self, order: &FinishingOrder) -> Result<(), InvalidOrderError> {
        match order.contestants().into_iter().find(|c| !self.is_contestant(c)) {
            Some(unknown) => Err(InvalidOrderError::UnknownContestant {
                name: unknown.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn dedup<I>(items: I) -> (Vec<ParticipantId>, HashSet<ParticipantId>)
where
    I: IntoIterator,
    I::Item: Into<ParticipantId>,
{
    let mut list = Vec::new();
    let mut set = HashSet::new();
    for item in items {
        let id = item.into();
        if set.insert(id.clone()) {
            list.push(id);
        }
    }
    (list, set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_roster_uses_one_list() {
        let roster = Roster::shared(["A", "B", "C"]);
        assert!(roster.is_bettor(&"A".into()));
        assert!(roster.is_contestant(&"A".into()));
        assert_eq!(roster.contestants().len(), 3);
    }

    #[test]
    fn separate_lists_are_independent() {
        let roster = Roster::new(["Pat"], ["Horse 1", "Horse 2", "Horse 3"]);
        assert!(roster.check_bettor(&"Pat".into()).is_ok());
        assert_eq!(
            roster.check_bettor(&"Horse 1".into()),
            Err(ValidationError::UnknownBettor {
                name: "Horse 1".into()
            })
        );
        assert_eq!(
            roster.check_contestant(&"Pat".into()),
            Err(ValidationError::UnknownContestant { name: "Pat".into() })
        );
    }

    #[test]
    fn duplicates_collapse_keeping_order() {
        let roster = Roster::shared(["B", "A", "B"]);
        let names: Vec<_> = roster.contestants().iter().map(ParticipantId::as_str).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn check_order_flags_unknown_contestant() {
        let roster = Roster::shared(["A", "B", "C"]);
        let order = FinishingOrder::try_new("A".into(), "B".into(), "Z".into()).unwrap();
        assert_eq!(
            roster.check_order(&order),
            Err(InvalidOrderError::UnknownContestant { name: "Z".into() })
        );
    }
}
