//! End-to-end session tests: full games driven through the public command
//! surface, win detection, and the per-turn action rules.

use rps_duel::{
    Archetype, CommandError, GameSession, MutedStat, SwitchSelection, HAND_SIZE, VISIBLE_WINDOW,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Index of the first alive card in a hand, if any.
fn first_alive(session: &GameSession, player_index: usize) -> Option<usize> {
    session.players()[player_index]
        .slots()
        .iter()
        .position(|card| !card.is_defeated())
}

/// Index of the first alive, non-Paper card in a hand.
///
/// Stone and Scissors attacks never mute the target, so a driver that
/// attacks only with these never creates a defence-muted (and therefore
/// unkillable) opponent card and is guaranteed to finish.
fn first_alive_non_paper(session: &GameSession, player_index: usize) -> Option<usize> {
    session.players()[player_index]
        .slots()
        .iter()
        .position(|card| !card.is_defeated() && card.archetype() != Archetype::Paper)
}

/// Drive a game where only player 0 attacks (player 1 just passes) until
/// player 0 wins. Returns `None` when player 0 drew an all-Paper hand.
fn play_to_victory(seed: u64) -> Option<GameSession> {
    let mut session = GameSession::new("Alice", "Bob", seed);
    first_alive_non_paper(&session, 0)?;

    for _ in 0..500 {
        if session.is_game_over() {
            return Some(session);
        }

        if session.current_player_index() == 0 {
            let attacker = first_alive_non_paper(&session, 0).expect("never takes damage");
            let target = first_alive(&session, 1).expect("game is not over");
            session.perform_attack(attacker, target).unwrap();
        }
        if !session.is_game_over() {
            session.end_turn();
        }
    }

    panic!("game did not finish within 500 turns");
}

#[test]
fn test_game_plays_to_victory() {
    init_logs();
    let mut played = 0;

    for seed in 0..10 {
        let Some(session) = play_to_victory(seed) else {
            continue;
        };
        played += 1;

        assert!(session.is_game_over());
        assert_eq!(session.winner().unwrap().name(), "Alice");
        assert_eq!(session.status(), "Alice has won the game!");
        assert!(session.players()[1].has_lost());
        assert!(!session.players()[0].has_lost());

        // Defeated cards keep their slots
        assert_eq!(session.players()[1].slots().len(), HAND_SIZE);
    }

    assert!(played > 0, "every seed dealt an all-Paper hand");
}

#[test]
fn test_commands_fail_after_game_over() {
    let mut session = play_to_victory(0)
        .or_else(|| play_to_victory(1))
        .expect("one of the seeds plays out");

    assert_eq!(session.perform_attack(0, 0), Err(CommandError::GameOver));
    assert_eq!(
        session.switch_cards(&SwitchSelection::from_pairs([(0, 0)])),
        Err(CommandError::GameOver)
    );

    // The flag is monotonic
    session.end_turn();
    assert!(session.is_game_over());
    assert_eq!(session.perform_attack(0, 0), Err(CommandError::GameOver));
}

#[test]
fn test_attacking_defeated_cards_rejected() {
    // Drive until one of Bob's cards falls, then poke at it.
    for seed in 0..20 {
        let mut session = GameSession::new("Alice", "Bob", seed);
        if first_alive_non_paper(&session, 0).is_none() {
            continue;
        }

        let mut defeated_slot = None;
        for _ in 0..200 {
            let attacker = first_alive_non_paper(&session, 0).unwrap();
            let target = first_alive(&session, 1).unwrap();
            let outcome = session.perform_attack(attacker, target).unwrap();
            if outcome.target_defeated() {
                defeated_slot = Some(target);
                break;
            }
            session.end_turn();
            session.end_turn();
        }

        let target = defeated_slot.expect("some card must fall within 200 turns");

        // Cycle back to Alice with a fresh turn before poking the corpse.
        session.end_turn();
        session.end_turn();
        assert_eq!(
            session.perform_attack(first_alive_non_paper(&session, 0).unwrap(), target),
            Err(CommandError::TargetAlreadyDefeated)
        );

        // Bob can neither attack with nor switch out the defeated card.
        session.end_turn();
        assert_eq!(
            session.perform_attack(target, 0),
            Err(CommandError::AttackerDefeated)
        );
        assert_eq!(
            session.switch_cards(&SwitchSelection::from_pairs([(target, 0)])),
            Err(CommandError::SlotDefeated(target))
        );
        return;
    }

    panic!("no seed produced a playable hand");
}

#[test]
fn test_muted_attacker_consumes_the_attack() {
    // Find a game where Alice's Paper mutes the attack of Bob's slot 0.
    for seed in 0..200 {
        let mut session = GameSession::new("Alice", "Bob", seed);
        let Some(paper) = session.players()[0]
            .slots()
            .iter()
            .position(|card| card.archetype() == Archetype::Paper)
        else {
            continue;
        };

        let outcome = session.perform_attack(paper, 0).unwrap();
        if outcome.mute_applied != Some(MutedStat::Attack) {
            continue;
        }

        session.end_turn();
        let muted = session.perform_attack(0, 0).unwrap();

        assert!(muted.attacker_muted);
        assert!(muted.hits.is_empty());
        assert!(session.current_player().has_attacked_this_turn());
        assert_eq!(session.perform_attack(1, 0), Err(CommandError::AlreadyAttacked));
        return;
    }

    panic!("no seed produced an attack mute");
}

#[test]
fn test_mutes_survive_turn_boundaries() {
    for seed in 0..200 {
        let mut session = GameSession::new("Alice", "Bob", seed);
        let Some(paper) = session.players()[0]
            .slots()
            .iter()
            .position(|card| card.archetype() == Archetype::Paper)
        else {
            continue;
        };

        let outcome = session.perform_attack(paper, 0).unwrap();
        if outcome.mute_applied.is_none() {
            continue;
        }

        let was_attack_mute = outcome.mute_applied == Some(MutedStat::Attack);
        for _ in 0..6 {
            session.end_turn();
        }

        let card = session.players()[1].slot(0).unwrap();
        assert_eq!(card.is_attack_muted(), was_attack_mute);
        assert_eq!(card.is_defence_muted(), !was_attack_mute);
        return;
    }

    panic!("no seed produced a mute");
}

#[test]
fn test_switching_drains_the_deck() {
    let mut session = GameSession::new("Alice", "Bob", 42);
    assert_eq!(session.deck().remaining(), 20);

    let full_hand = SwitchSelection::from_pairs((0..HAND_SIZE).map(|i| (i, i)));

    // Four full-hand switches empty the 20-card pile.
    for expected in [15, 10, 5, 0] {
        session.switch_cards(&full_hand).unwrap();
        assert_eq!(session.deck().remaining(), expected);
        session.end_turn();
    }

    assert!(session.deck().is_empty());
    assert_eq!(
        session.switch_cards(&SwitchSelection::from_pairs([(0, 0)])),
        Err(CommandError::NotEnoughVisibleCards {
            available: 0,
            requested: 1
        })
    );
}

#[test]
fn test_switch_against_partial_window() {
    let mut session = GameSession::new("Alice", "Bob", 42);

    // Drain to a 3-card window: 20 -> 5 -> 3
    let full_hand = SwitchSelection::from_pairs((0..HAND_SIZE).map(|i| (i, i)));
    for _ in 0..3 {
        session.switch_cards(&full_hand).unwrap();
        session.end_turn();
    }
    session
        .switch_cards(&SwitchSelection::from_pairs([(0, 0), (1, 1)]))
        .unwrap();
    session.end_turn();

    assert_eq!(session.deck().remaining(), 3);
    assert_eq!(session.deck().visible().len(), 3);

    // A pick past the shrunken window is rejected even though the pile
    // still has enough cards overall.
    assert_eq!(
        session.switch_cards(&SwitchSelection::from_pairs([(0, 3)])),
        Err(CommandError::InvalidPickIndex(3))
    );
    assert_eq!(
        session.switch_cards(&SwitchSelection::from_pairs([
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 3)
        ])),
        Err(CommandError::NotEnoughVisibleCards {
            available: 3,
            requested: 4
        })
    );

    // Exactly the window is fine.
    let outcome = session
        .switch_cards(&SwitchSelection::from_pairs([(0, 0), (1, 1), (2, 2)]))
        .unwrap();
    assert_eq!(outcome.replacements.len(), 3);
    assert!(session.deck().is_empty());
}

#[test]
fn test_window_tracks_pile_prefix() {
    let mut session = GameSession::new("Alice", "Bob", 42);

    while !session.deck().is_empty() {
        let window = session.deck().visible();
        assert_eq!(window.len(), VISIBLE_WINDOW.min(session.deck().remaining()));
        let expected_next = window[0].clone();

        session
            .switch_cards(&SwitchSelection::from_pairs([(0, 0)]))
            .unwrap();
        assert_eq!(session.current_player().slot(0).unwrap(), &expected_next);

        session.end_turn();
        session.end_turn(); // back to the same player, flags reset
    }
}

#[test]
fn test_error_messages_are_display_ready() {
    assert_eq!(
        CommandError::GameOver.to_string(),
        "the game is already over"
    );
    assert_eq!(
        CommandError::NotEnoughVisibleCards {
            available: 2,
            requested: 4
        }
        .to_string(),
        "only 2 card(s) visible in the deck, needed 4"
    );
    assert_eq!(
        CommandError::InvalidAttackerIndex(7).to_string(),
        "invalid attacking card index: 7"
    );
}
