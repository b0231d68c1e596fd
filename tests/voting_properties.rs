//! Property tests for the vote ledger and super vote sizing.
//!
//! Random sequences of votes, additions and removals are replayed against a
//! small roster; the leader, capacity and ordering guarantees must hold
//! after every step.

use proptest::prelude::*;

use playoff::domain::foundation::{SongId, Timestamp};
use playoff::domain::voting::{NewSong, Song, SongStore, SuperVoteCalculator, VoteLedger};

#[derive(Debug, Clone)]
enum Op {
    Vote { pick: usize, votes: u32 },
    Add { votes: u32 },
    Remove { pick: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), 0u32..50).prop_map(|(pick, votes)| Op::Vote { pick, votes }),
        2 => (0u32..50).prop_map(|votes| Op::Add { votes }),
        1 => any::<usize>().prop_map(|pick| Op::Remove { pick }),
    ]
}

fn seeded_ledger(max_songs: usize, votes: &[u32]) -> VoteLedger {
    let songs: Vec<Song> = votes
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Song::admit(
                NewSong::new(format!("Seed {}", i), "Band", "/a.mp3")
                    .with_id(SongId::new(format!("seed-{}", i)).unwrap())
                    .with_votes(*v),
                Timestamp::from_unix_secs(1_700_000_000 + i as i64),
            )
            .unwrap()
        })
        .collect();
    VoteLedger::new(SongStore::restore(max_songs, songs))
}

/// Seeds a roster whose admission times are `offsets` seconds after a fixed
/// epoch, listed in roster order.
fn ledger_with_times(votes: &[u32], offsets: &[i64]) -> VoteLedger {
    let songs: Vec<Song> = votes
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(i, (v, offset))| {
            Song::admit(
                NewSong::new(format!("Seed {}", i), "Band", "/a.mp3")
                    .with_id(SongId::new(format!("seed-{}", i)).unwrap())
                    .with_votes(*v),
                Timestamp::from_unix_secs(1_700_000_000 + offset),
            )
            .unwrap()
        })
        .collect();
    VoteLedger::new(SongStore::restore(votes.len(), songs))
}

/// Among the songs holding the most votes, the one admitted first.
fn earliest_top_song(ledger: &VoteLedger) -> Option<SongId> {
    let top = max_votes(ledger)?;
    ledger
        .store()
        .all()
        .iter()
        .filter(|s| s.votes() == top)
        .min_by_key(|s| s.added_at())
        .map(|s| s.id().clone())
}

fn pick_id(ledger: &VoteLedger, pick: usize) -> Option<SongId> {
    let songs = ledger.store().all();
    if songs.is_empty() {
        None
    } else {
        Some(songs[pick % songs.len()].id().clone())
    }
}

fn max_votes(ledger: &VoteLedger) -> Option<u32> {
    ledger.store().all().iter().map(Song::votes).max()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn leader_holds_max_votes_after_every_registered_vote(
        seeds in prop::collection::vec(0u32..20, 1..8),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut ledger = seeded_ledger(8, &seeds);
        let mut added = 0;

        for op in ops {
            match op {
                Op::Vote { pick, votes } => {
                    let Some(id) = pick_id(&ledger, pick) else { continue };
                    let event = ledger.register_vote(&id, votes).unwrap();

                    let leader = ledger.leader().cloned();
                    prop_assert_eq!(leader.as_ref().map(Song::votes), max_votes(&ledger));
                    prop_assert_eq!(event.leader.as_ref().map(Song::id), leader.as_ref().map(Song::id));
                    prop_assert_eq!(leader.map(|s| s.id().clone()), earliest_top_song(&ledger));
                }
                Op::Add { votes } => {
                    added += 1;
                    let new = NewSong::new(format!("Added {}", added), "Band", "/a.mp3")
                        .with_votes(votes);
                    let admitted = ledger.add_song(new).unwrap();
                    prop_assert!(ledger.get(admitted.song.id()).is_some());
                }
                Op::Remove { pick } => {
                    let Some(id) = pick_id(&ledger, pick) else { continue };
                    ledger.remove_song(&id).unwrap();
                    prop_assert!(ledger.get(&id).is_none());
                }
            }

            prop_assert!(ledger.len() <= ledger.max_songs());
            if ledger.is_empty() {
                prop_assert!(ledger.leader().is_none());
            } else {
                prop_assert!(ledger.leader().is_some());
            }
        }
    }

    #[test]
    fn tied_leader_is_the_earliest_admitted_regardless_of_roster_order(
        offsets in Just((0..8i64).collect::<Vec<_>>()).prop_shuffle(),
        tied in prop::collection::vec(any::<bool>(), 8),
        pick in any::<usize>(),
    ) {
        prop_assume!(tied.iter().any(|t| *t));
        let votes: Vec<u32> = tied.iter().map(|t| if *t { 9 } else { 4 }).collect();
        let mut ledger = ledger_with_times(&votes, &offsets);

        let leader = ledger.leader().map(|s| s.id().clone());
        prop_assert_eq!(leader, earliest_top_song(&ledger));

        // Voting a song into the tie re-runs the election under the same rule
        let id = pick_id(&ledger, pick).unwrap();
        ledger.register_vote(&id, 9).unwrap();
        let leader = ledger.leader().map(|s| s.id().clone());
        prop_assert_eq!(leader, earliest_top_song(&ledger));
    }

    #[test]
    fn sorted_roster_is_a_descending_permutation(
        seeds in prop::collection::vec(0u32..20, 0..12),
    ) {
        let ledger = seeded_ledger(12, &seeds);
        let sorted = ledger.sorted_roster();

        prop_assert_eq!(sorted.len(), ledger.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].votes() >= w[1].votes()));
        for song in ledger.store().all() {
            prop_assert!(sorted.iter().any(|s| s.id() == song.id()));
        }
    }

    #[test]
    fn super_vote_without_playback_makes_target_the_unique_leader(
        seeds in prop::collection::vec(0u32..1000, 1..12),
        pick in any::<usize>(),
    ) {
        let mut ledger = seeded_ledger(12, &seeds);
        let target = pick_id(&ledger, pick).unwrap();
        let current = ledger.get(&target).map(Song::votes).unwrap();

        let boost = SuperVoteCalculator::compute_boost(&target, ledger.store().all(), None).unwrap();
        prop_assert!(boost >= 1);

        ledger.register_vote(&target, current + boost).unwrap();

        let leader = ledger.leader().unwrap();
        prop_assert_eq!(leader.id(), &target);
        for other in ledger.store().all().iter().filter(|s| s.id() != &target) {
            prop_assert!(other.votes() < current + boost);
        }
    }

    #[test]
    fn super_vote_passes_the_playing_song(
        seeds in prop::collection::vec(0u32..1000, 2..12),
        target_pick in any::<usize>(),
        playing_pick in any::<usize>(),
    ) {
        let ledger = seeded_ledger(12, &seeds);
        let target = pick_id(&ledger, target_pick).unwrap();
        let playing = pick_id(&ledger, playing_pick).unwrap();
        prop_assume!(target != playing);

        let target_votes = ledger.get(&target).map(Song::votes).unwrap();
        let playing_votes = ledger.get(&playing).map(Song::votes).unwrap();

        let boost = SuperVoteCalculator::compute_boost(&target, ledger.store().all(), Some(&playing)).unwrap();
        prop_assert!(target_votes + boost > playing_votes);
        prop_assert!(boost == 1 || target_votes + boost == playing_votes + 1);
    }
}

#[test]
fn later_roster_entry_admitted_earlier_wins_a_tie() {
    let ledger = ledger_with_times(&[5, 8, 8, 2], &[0, 30, 10, 20]);

    assert_eq!(ledger.leader().unwrap().id().as_str(), "seed-2");
    assert_eq!(earliest_top_song(&ledger).unwrap().as_str(), "seed-2");
}
