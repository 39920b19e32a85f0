#[cfg(test)]
mod battle_tests {
    use crate::rules;
    use crate::{
        Actor, BattleAction, BattleEngine, BattlePhase, BattleState, LogKind, ScriptedRng,
        Winner,
    };
    use pretty_assertions::assert_eq;

    fn scripted(rng: ScriptedRng) -> BattleEngine<ScriptedRng> {
        BattleEngine::new(rng)
    }

    fn staged(player: u32, monster: u32, rng: ScriptedRng) -> BattleEngine<ScriptedRng> {
        BattleEngine::with_state(BattleState::with_health(player, monster), rng)
    }

    #[test]
    fn test_new_engine_has_defaults() {
        let engine = BattleEngine::with_seed(1);
        assert_eq!(engine.state(), &BattleState::default());
        assert_eq!(engine.player_health(), 100);
        assert_eq!(engine.monster_health(), 100);
        assert_eq!(engine.phase(), BattlePhase::InProgress);
        assert!(engine.special_attack_available());
        assert!(engine.battle_log().is_empty());
    }

    #[test]
    fn test_attack_chains_monster_turn() {
        let mut engine = scripted(ScriptedRng::new().hit(false, 8).hit(false, 10));
        engine.attack();

        assert_eq!(engine.monster_health(), 92);
        assert_eq!(engine.player_health(), 90);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.battle_log().len(), 2);

        // newest first: the monster's reply, then the player's hit
        let latest = engine.battle_log().get(0).unwrap();
        assert_eq!(latest.actor, Actor::Monster);
        assert_eq!(latest.amount, Some(10));
        let first = engine.battle_log().get(1).unwrap();
        assert_eq!(first.actor, Actor::Player);
        assert_eq!(first.kind, LogKind::Damage);
        assert_eq!(first.amount, Some(8));

        assert_eq!(engine.stats().player_damage_dealt, 8);
        assert_eq!(engine.stats().monster_damage_dealt, 10);
        assert_eq!(engine.stats().rounds_played, 1);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_player_critical_hit() {
        let mut engine = scripted(ScriptedRng::new().hit(true, 11).hit(false, 8));
        engine.attack();

        // 11 * 1.5 = 16.5, rounded down
        assert_eq!(engine.monster_health(), 84);
        assert!(engine.last_action_critical());
        assert_eq!(engine.stats().critical_hits, 1);
        assert!(engine.battle_log().get(1).unwrap().critical);
    }

    #[test]
    fn test_monster_critical_not_counted() {
        let mut engine = scripted(ScriptedRng::new().hit(false, 5).hit(true, 10));
        engine.attack();

        assert_eq!(engine.player_health(), 85);
        assert_eq!(engine.stats().monster_damage_dealt, 15);
        assert_eq!(engine.stats().critical_hits, 0);
        assert!(!engine.last_action_critical());
        assert!(engine.battle_log().latest().unwrap().critical);
    }

    #[test]
    fn test_critical_damage_rounds_down() {
        assert_eq!(rules::critical_damage(5), 7);
        assert_eq!(rules::critical_damage(8), 12);
        assert_eq!(rules::critical_damage(19), 28);
    }

    #[test]
    fn test_special_attack_sets_cooldown() {
        let mut engine = scripted(ScriptedRng::new().hit(false, 15));
        engine.special_attack();

        assert_eq!(engine.monster_health(), 85);
        assert_eq!(engine.special_attack_cooldown(), 3);
        assert!(!engine.special_attack_available());
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn test_special_attack_cooldown_cycle() {
        // an empty script rolls range minimums: 10 for the special, 5 per attack
        let mut engine = scripted(ScriptedRng::new());
        engine.special_attack();
        assert_eq!(engine.special_attack_cooldown(), 3);

        engine.special_attack();
        assert_eq!(engine.round(), 1, "special on cooldown must be ignored");

        engine.attack();
        assert_eq!(engine.special_attack_cooldown(), 2);
        engine.attack();
        assert_eq!(engine.special_attack_cooldown(), 1);
        assert!(!engine.special_attack_available());
        engine.attack();
        assert_eq!(engine.special_attack_cooldown(), 0);
        assert!(engine.special_attack_available());

        assert_eq!(engine.monster_health(), 100 - 10 - 5 * 3);
        assert_eq!(engine.player_health(), 100 - 8 * 4);

        engine.special_attack();
        assert_eq!(engine.round(), 5);
        assert_eq!(engine.special_attack_cooldown(), 3);
    }

    #[test]
    fn test_heal_decrements_cooldown() {
        let mut engine = scripted(ScriptedRng::new());
        engine.special_attack();
        engine.heal();
        assert_eq!(engine.special_attack_cooldown(), 2);
    }

    #[test]
    fn test_heal_capped_at_max() {
        let mut engine = staged(95, 100, ScriptedRng::new().value(12).hit(false, 8));
        engine.heal();

        let heal = engine.battle_log().get(1).unwrap();
        assert_eq!(heal.kind, LogKind::Heal);
        assert_eq!(heal.amount, Some(5));
        assert!(heal.capped);
        assert_eq!(engine.stats().healing_done, 5);
        // the monster still answers the heal
        assert_eq!(engine.player_health(), 92);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.stats().rounds_played, 1);
    }

    #[test]
    fn test_heal_reaching_ceiling_exactly_is_capped() {
        let mut engine = staged(88, 100, ScriptedRng::new().value(12));
        engine.heal();

        let heal = engine.battle_log().get(1).unwrap();
        assert_eq!(heal.amount, Some(12));
        assert!(heal.capped);
    }

    #[test]
    fn test_heal_below_ceiling() {
        let mut engine = staged(50, 100, ScriptedRng::new().value(10).hit(false, 8));
        engine.heal();

        let heal = engine.battle_log().get(1).unwrap();
        assert!(!heal.capped);
        assert_eq!(heal.amount, Some(10));
        assert_eq!(engine.stats().healing_done, 10);
        assert_eq!(engine.player_health(), 52);
    }

    #[test]
    fn test_heal_at_full_health_is_noop() {
        let mut engine = scripted(ScriptedRng::new().value(12));
        engine.heal();

        assert_eq!(engine.state(), &BattleState::default());
        assert_eq!(engine.rng().remaining(), (0, 1));
    }

    #[test]
    fn test_lethal_attack_skips_monster_turn() {
        let mut engine = staged(5, 5, ScriptedRng::new().hit(false, 7));
        engine.attack();

        assert_eq!(engine.monster_health(), 0);
        assert_eq!(engine.player_health(), 5);
        assert_eq!(engine.battle_log().len(), 1);
        assert_eq!(engine.winner(), Some(Winner::Player));
        assert!(engine.is_game_over());
        assert_eq!(engine.phase(), BattlePhase::GameOver);
    }

    #[test]
    fn test_monster_wins_on_counter_attack() {
        let mut engine = staged(10, 100, ScriptedRng::new().hit(false, 5).hit(false, 14));
        engine.attack();

        assert_eq!(engine.player_health(), 0);
        assert_eq!(engine.winner(), Some(Winner::Monster));
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_actions_ignored_after_game_over() {
        let mut engine = staged(5, 5, ScriptedRng::new());
        engine.attack();
        let finished = engine.state().clone();

        engine.attack();
        engine.special_attack();
        engine.heal();
        engine.surrender();

        assert_eq!(engine.state(), &finished);
    }

    #[test]
    fn test_surrender() {
        let mut engine = scripted(ScriptedRng::new());
        engine.attack();
        engine.surrender();

        assert_eq!(engine.player_health(), 0);
        assert_eq!(engine.winner(), Some(Winner::Monster));
        assert!(engine.is_game_over());
        assert_eq!(engine.round(), 1);

        let entry = engine.battle_log().latest().unwrap();
        assert_eq!(entry.kind, LogKind::Surrender);
        assert_eq!(entry.amount, None);

        let log_len = engine.battle_log().len();
        engine.surrender();
        assert_eq!(engine.battle_log().len(), log_len);
    }

    #[test]
    fn test_staged_knockout_is_settled_on_construction() {
        let mut engine = staged(40, 0, ScriptedRng::new());
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some(Winner::Player));
        assert_eq!(engine.phase(), BattlePhase::GameOver);

        // the recorded result cannot be overturned
        engine.surrender();
        engine.attack();
        assert_eq!(engine.winner(), Some(Winner::Player));
        assert_eq!(engine.player_health(), 40);
        assert_eq!(engine.round(), 0);
    }

    #[test]
    fn test_staged_player_down_is_monster_win() {
        let engine = staged(0, 50, ScriptedRng::new());
        assert!(engine.is_game_over());
        assert_eq!(engine.winner(), Some(Winner::Monster));
        assert_eq!(engine.snapshot().winner, Some(Winner::Monster));
    }

    #[test]
    fn test_both_down_is_draw() {
        let mut engine = staged(0, 0, ScriptedRng::new());
        assert_eq!(engine.winner(), Some(Winner::Draw));
        assert!(engine.is_game_over());

        engine.check_winner();
        assert_eq!(engine.winner(), Some(Winner::Draw));
    }

    #[test]
    fn test_winner_set_once() {
        let mut engine = staged(5, 5, ScriptedRng::new());
        engine.attack();
        assert_eq!(engine.winner(), Some(Winner::Player));

        engine.check_winner();
        assert_eq!(engine.winner(), Some(Winner::Player));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut engine = scripted(ScriptedRng::new().hit(true, 11));
        engine.special_attack();
        engine.attack();
        engine.surrender();
        assert!(engine.is_game_over());

        engine.reset();
        assert_eq!(engine.state(), &BattleState::default());

        engine.attack();
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut engine = scripted(ScriptedRng::new());
        engine.apply(BattleAction::SpecialAttack);
        assert_eq!(engine.special_attack_cooldown(), 3);
        engine.apply(BattleAction::Heal);
        assert_eq!(engine.round(), 2);
        engine.apply(BattleAction::Surrender);
        assert_eq!(engine.winner(), Some(Winner::Monster));
        engine.apply(BattleAction::Reset);
        assert_eq!(engine.state(), &BattleState::default());
    }

    #[test]
    fn test_seeded_battles_are_reproducible() {
        let actions = [
            BattleAction::Attack,
            BattleAction::SpecialAttack,
            BattleAction::Heal,
            BattleAction::Attack,
            BattleAction::Attack,
        ];
        let mut a = BattleEngine::with_seed(2024);
        let mut b = BattleEngine::with_seed(2024);
        for action in actions {
            a.apply(action);
            b.apply(action);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_snapshot_serializes_for_ui() {
        let mut engine = scripted(ScriptedRng::new());
        engine.special_attack();
        let json = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(json["player_health"], 92);
        assert_eq!(json["monster_health"], 90);
        assert_eq!(json["special_attack_cooldown"], 3);
        assert_eq!(json["special_attack_available"], false);
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["battle_log"][0]["actor"], "monster");
        assert_eq!(json["battle_log"][1]["kind"], "damage");
        assert_eq!(json["stats"]["rounds_played"], 1);

        engine.surrender();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["winner"], "monster");
        assert_eq!(json["game_over"], true);
    }
}
