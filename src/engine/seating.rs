//! Seating auto-assignment engine.
//!
//! Greedy, family-atomic placement: whole families are assigned to the
//! first table with enough remaining capacity, walking tables in a
//! per-family preference order. Families that fit nowhere are skipped
//! whole and reported back; the engine never splits a family and never
//! exceeds a table's declared capacity.
//!
//! Pure computation over snapshots: the caller persists the returned
//! placements. Running the engine and applying its placements must happen
//! under one wedding write lock so concurrent runs cannot double-book a
//! table.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::guest::Guest;
use crate::domain::table::{SeatingTable, TableCategory};

/// Family bucket for guests without a family name.
const UNKNOWN_FAMILY: &str = "Unknown";

/// Seating engine failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeatingError {
    /// Auto-assignment was invoked with an empty table list.
    #[error("no seating tables available")]
    NoTablesAvailable,
}

/// One computed seat assignment, to be written back by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    /// Guest being seated.
    pub guest_id: Uuid,
    /// Table the guest's family was placed at.
    pub table_id: Uuid,
    /// Seat number within the table, starting at 1.
    pub seat_number: u32,
}

/// Result of one auto-assignment run.
#[derive(Debug, Clone, Serialize)]
pub struct SeatingPlan {
    /// Total guests placed in this run.
    pub assigned_count: u32,
    /// Every seat assignment computed in this run.
    pub placements: Vec<Placement>,
    /// Families that fit on no table, by family name, in iteration order.
    pub unplaced_families: Vec<String>,
}

/// Assigns unseated, seatable guests to tables, one whole family at a time.
///
/// Families are iterated in insertion order of first appearance in the
/// guest list (a deliberate simplicity tradeoff, not size-sorted). Each
/// family walks the tables in its preference order and is placed first-fit
/// into the first table whose remaining capacity holds the entire family.
/// Seat numbers continue from the table's current occupancy, which is
/// seeded from guests already seated.
///
/// # Errors
///
/// Returns [`SeatingError::NoTablesAvailable`] when `tables` is empty.
pub fn auto_assign(tables: &[SeatingTable], guests: &[Guest]) -> Result<SeatingPlan, SeatingError> {
    if tables.is_empty() {
        return Err(SeatingError::NoTablesAvailable);
    }

    // Pre-existing assignments count against capacity.
    let mut occupancy: HashMap<Uuid, u32> = HashMap::new();
    for guest in guests {
        if let Some(table_id) = guest.table_id {
            *occupancy.entry(table_id).or_insert(0) += 1;
        }
    }

    let families = group_families(guests);

    let mut placements = Vec::new();
    let mut unplaced_families = Vec::new();

    for (family_name, members) in &families {
        let has_vip = members.iter().any(|g| g.vip);
        let has_elderly = members.iter().any(|g| g.elderly);
        let family_size = u32::try_from(members.len()).unwrap_or(u32::MAX);

        let ordered = preference_order(tables, has_vip, has_elderly);

        let mut placed = false;
        for table in ordered {
            let occupied = occupancy.get(&table.id).copied().unwrap_or(0);
            if table.capacity.saturating_sub(occupied) >= family_size {
                for (offset, guest) in members.iter().enumerate() {
                    placements.push(Placement {
                        guest_id: guest.id,
                        table_id: table.id,
                        seat_number: occupied + 1 + u32::try_from(offset).unwrap_or(u32::MAX),
                    });
                }
                occupancy.insert(table.id, occupied + family_size);
                placed = true;
                break;
            }
        }

        if !placed {
            // No partial seating: the family is skipped whole.
            unplaced_families.push(family_name.clone());
        }
    }

    Ok(SeatingPlan {
        assigned_count: u32::try_from(placements.len()).unwrap_or(u32::MAX),
        placements,
        unplaced_families,
    })
}

/// Groups unassigned, seatable guests by family name in insertion order of
/// first appearance. Guests without a family name share the `"Unknown"`
/// bucket.
fn group_families(guests: &[Guest]) -> Vec<(String, Vec<&Guest>)> {
    let mut families: Vec<(String, Vec<&Guest>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for guest in guests {
        if !guest.is_unassigned() || !guest.rsvp.is_seatable() {
            continue;
        }
        let name = guest.family.as_deref().unwrap_or(UNKNOWN_FAMILY);
        if let Some(&i) = index.get(name) {
            if let Some((_, members)) = families.get_mut(i) {
                members.push(guest);
            }
        } else {
            index.insert(name, families.len());
            families.push((name.to_string(), vec![guest]));
        }
    }

    families
}

/// Builds the per-family table preference order as an explicit two-pass
/// bucket sort: tables of the preferred category first, then the rest,
/// both in original relative order. The partial comparator of the
/// reference behavior is deliberately not expressed as a sort key, so the
/// ordering cannot depend on sort-stability quirks.
fn preference_order(tables: &[SeatingTable], has_vip: bool, has_elderly: bool) -> Vec<&SeatingTable> {
    let preferred = if has_vip {
        Some(TableCategory::Vip)
    } else if has_elderly {
        Some(TableCategory::Family)
    } else {
        None
    };

    let Some(preferred) = preferred else {
        return tables.iter().collect();
    };

    let mut ordered: Vec<&SeatingTable> =
        tables.iter().filter(|t| t.category == preferred).collect();
    ordered.extend(tables.iter().filter(|t| t.category != preferred));
    ordered
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::guest::RsvpStatus;
    use crate::domain::table::TableShape;

    fn table(name: &str, capacity: u32, category: TableCategory) -> SeatingTable {
        SeatingTable {
            id: Uuid::new_v4(),
            name: name.to_string(),
            capacity,
            shape: TableShape::Round,
            category,
        }
    }

    fn guest(name: &str, family: Option<&str>, vip: bool, elderly: bool) -> Guest {
        Guest {
            id: Uuid::new_v4(),
            name: name.to_string(),
            family: family.map(ToString::to_string),
            vip,
            elderly,
            rsvp: RsvpStatus::Accepted,
            table_id: None,
            seat_number: None,
        }
    }

    #[test]
    fn empty_table_list_is_an_error() {
        let guests = vec![guest("Asha", Some("Patel"), false, false)];
        let result = auto_assign(&[], &guests);
        assert_eq!(result.err(), Some(SeatingError::NoTablesAvailable));
    }

    #[test]
    fn vip_family_prefers_vip_table_and_overflow_goes_general() {
        // Spec scenario: T1 vip capacity 4, T2 general capacity 2. A VIP
        // family of 3 takes T1 (leaving one seat); a family of 2 cannot
        // fit T1's single remaining seat and fills T2 exactly.
        let t1 = table("T1", 4, TableCategory::Vip);
        let t2 = table("T2", 2, TableCategory::General);
        let tables = vec![t1.clone(), t2.clone()];

        let guests = vec![
            guest("Asha", Some("Patel"), true, false),
            guest("Ravi", Some("Patel"), false, false),
            guest("Meera", Some("Patel"), false, false),
            guest("Vikram", Some("Shah"), false, false),
            guest("Nisha", Some("Shah"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert_eq!(plan.assigned_count, 5);
        assert!(plan.unplaced_families.is_empty());

        let patel_tables: Vec<Uuid> = plan
            .placements
            .iter()
            .take(3)
            .map(|p| p.table_id)
            .collect();
        assert!(patel_tables.iter().all(|id| *id == t1.id));

        let shah_tables: Vec<Uuid> = plan
            .placements
            .iter()
            .skip(3)
            .map(|p| p.table_id)
            .collect();
        assert!(shah_tables.iter().all(|id| *id == t2.id));
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let tables = vec![
            table("T1", 3, TableCategory::General),
            table("T2", 3, TableCategory::General),
        ];
        let guests = vec![
            guest("A", Some("Iyer"), false, false),
            guest("B", Some("Iyer"), false, false),
            guest("C", Some("Rao"), false, false),
            guest("D", Some("Rao"), false, false),
            guest("E", Some("Bose"), false, false),
            guest("F", Some("Bose"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));

        let mut per_table: HashMap<Uuid, Vec<u32>> = HashMap::new();
        for p in &plan.placements {
            per_table.entry(p.table_id).or_default().push(p.seat_number);
        }
        for (table_id, seats) in &per_table {
            let capacity = tables
                .iter()
                .find(|t| t.id == *table_id)
                .map(|t| t.capacity)
                .unwrap_or(0);
            assert!(seats.len() as u32 <= capacity);
            // Seat numbers are unique and within capacity.
            let mut sorted = seats.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), seats.len());
            assert!(sorted.iter().all(|s| *s >= 1 && *s <= capacity));
        }
        // Two of the three families fit; one is left whole.
        assert_eq!(plan.assigned_count, 4);
        assert_eq!(plan.unplaced_families.len(), 1);
    }

    #[test]
    fn families_are_never_split() {
        let tables = vec![
            table("T1", 4, TableCategory::General),
            table("T2", 4, TableCategory::General),
        ];
        let guests = vec![
            guest("A", Some("Iyer"), false, false),
            guest("B", Some("Iyer"), false, false),
            guest("C", Some("Iyer"), false, false),
            guest("D", Some("Rao"), false, false),
            guest("E", Some("Rao"), false, false),
            guest("F", Some("Rao"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert_eq!(plan.assigned_count, 6);

        let mut family_tables: HashMap<&str, Vec<Uuid>> = HashMap::new();
        for p in &plan.placements {
            let family = guests
                .iter()
                .find(|g| g.id == p.guest_id)
                .and_then(|g| g.family.as_deref())
                .unwrap_or("?");
            family_tables.entry(family).or_default().push(p.table_id);
        }
        for (_, ids) in family_tables {
            assert!(ids.windows(2).all(|w| w.first() == w.get(1)));
        }
    }

    #[test]
    fn oversized_family_is_skipped_and_reported() {
        let tables = vec![table("T1", 2, TableCategory::General)];
        let guests = vec![
            guest("A", Some("Iyer"), false, false),
            guest("B", Some("Iyer"), false, false),
            guest("C", Some("Iyer"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert_eq!(plan.assigned_count, 0);
        assert!(plan.placements.is_empty());
        assert_eq!(plan.unplaced_families, vec!["Iyer".to_string()]);
    }

    #[test]
    fn elderly_family_prefers_family_table() {
        let general = table("T1", 8, TableCategory::General);
        let family = table("T2", 8, TableCategory::Family);
        let tables = vec![general, family.clone()];

        let guests = vec![
            guest("Dadi", Some("Mehta"), false, true),
            guest("Kiran", Some("Mehta"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert!(plan.placements.iter().all(|p| p.table_id == family.id));
    }

    #[test]
    fn vip_preference_wins_over_elderly_preference() {
        let vip = table("T1", 8, TableCategory::Vip);
        let fam = table("T2", 8, TableCategory::Family);
        let tables = vec![fam, vip.clone()];

        // Family has both a VIP and an elderly member: VIP tables first.
        let guests = vec![
            guest("Nani", Some("Desai"), false, true),
            guest("Arjun", Some("Desai"), true, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert!(plan.placements.iter().all(|p| p.table_id == vip.id));
    }

    #[test]
    fn declined_and_seated_guests_are_ignored() {
        let t1 = table("T1", 4, TableCategory::General);
        let tables = vec![t1.clone()];

        let mut seated = guest("Already", Some("Kapoor"), false, false);
        seated.table_id = Some(t1.id);
        seated.seat_number = Some(1);

        let mut declined = guest("NoShow", Some("Kapoor"), false, false);
        declined.rsvp = RsvpStatus::Declined;

        let guests = vec![
            seated,
            declined,
            guest("Late", Some("Kapoor"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        // Only the unassigned, non-declined guest is placed, and the seat
        // number continues past the pre-existing occupant.
        assert_eq!(plan.assigned_count, 1);
        assert_eq!(
            plan.placements.first().map(|p| p.seat_number),
            Some(2)
        );
    }

    #[test]
    fn nameless_guests_share_the_unknown_bucket() {
        let tables = vec![table("T1", 4, TableCategory::General)];
        let guests = vec![
            guest("Solo A", None, false, false),
            guest("Solo B", None, false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert_eq!(plan.assigned_count, 2);
        // One family bucket, consecutive seats.
        let seats: Vec<u32> = plan.placements.iter().map(|p| p.seat_number).collect();
        assert_eq!(seats, vec![1, 2]);
    }

    #[test]
    fn families_fill_in_first_appearance_order() {
        let tables = vec![table("T1", 3, TableCategory::General)];
        // The Rao family appears first even though the Iyer family is
        // larger; insertion order decides who gets the capacity.
        let guests = vec![
            guest("A", Some("Rao"), false, false),
            guest("B", Some("Iyer"), false, false),
            guest("C", Some("Iyer"), false, false),
            guest("D", Some("Rao"), false, false),
            guest("E", Some("Iyer"), false, false),
        ];

        let plan = auto_assign(&tables, &guests).unwrap_or_else(|e| panic!("assign failed: {e}"));
        assert_eq!(plan.assigned_count, 2);
        assert_eq!(plan.unplaced_families, vec!["Iyer".to_string()]);
    }
}
