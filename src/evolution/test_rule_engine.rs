#[cfg(test)]
mod tests {
    use crate::clock::{ClockTime, FixedClock};
    use crate::evolution::EvolutionRuleEngine;
    use crate::pokedata::default_table;
    use crate::pokemon::{Party, PartyPokemon};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{
        EvolutionCondition, EvolutionMethod, EvolutionTable, EvolutionTarget, Gender, Item, Move,
        Species, SpeciesEvolutions,
    };

    // January is Spring: daylight runs 05:00-19:59, night 20:00-04:59.
    const DAY: FixedClock = FixedClock(ClockTime { month: 1, hour: 12 });
    const NIGHT: FixedClock = FixedClock(ClockTime { month: 1, hour: 23 });

    fn pokemon(species: Species, gender: Gender, level: u8) -> PartyPokemon {
        let mut pkmn = PartyPokemon::new(species, gender, level);
        pkmn.friendship = 0;
        pkmn
    }

    fn solo_party(pkmn: PartyPokemon) -> Party {
        let mut party = Party::new();
        party.push(pkmn).unwrap();
        party
    }

    fn table_of(species: Species, conditions: Vec<EvolutionCondition>) -> EvolutionTable {
        EvolutionTable::new(vec![SpeciesEvolutions {
            species,
            form: 0,
            conditions,
        }])
    }

    fn level_up_into(min_level: u8, species: Species) -> EvolutionCondition {
        EvolutionCondition {
            method: EvolutionMethod::LevelUp { min_level },
            into: EvolutionTarget { species, form: 0 },
        }
    }

    // --- Ordering ---

    #[test]
    fn first_declared_condition_wins_even_if_later_ones_match() {
        // Level 18 satisfies both thresholds; declared order decides.
        let table = table_of(
            Species::Machop,
            vec![
                level_up_into(16, Species::Machoke),
                level_up_into(20, Species::Machamp),
            ],
        );
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let party = solo_party(pokemon(Species::Machop, Gender::Male, 18));

        let result = engine.check_level_up(&party, 0).unwrap();
        assert_eq!(result.into.species, Species::Machoke);
    }

    #[test]
    fn below_every_threshold_is_no_match_not_an_error() {
        let table = table_of(Species::Machop, vec![level_up_into(16, Species::Machoke)]);
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let party = solo_party(pokemon(Species::Machop, Gender::Male, 15));

        assert_eq!(engine.check_level_up(&party, 0), None);
    }

    // --- Day/night gating ---

    #[rstest]
    #[case::spring(1)]
    #[case::summer(2)]
    #[case::autumn(3)]
    #[case::winter(4)]
    fn friendship_day_and_night_split_is_exhaustive_and_exclusive(#[case] month: u8) {
        // For every hour of every season, a max-friendship Eevee evolves
        // into exactly one of Espeon (day) or Umbreon (night).
        let table = default_table().unwrap();
        let mut eevee = pokemon(Species::Eevee, Gender::Female, 30);
        eevee.friendship = 255;
        let party = solo_party(eevee);

        for hour in 0..24u8 {
            let clock = FixedClock(ClockTime { month, hour });
            let engine = EvolutionRuleEngine::new(&table, &clock);
            let result = engine.check_level_up(&party, 0).unwrap();
            assert!(
                result.into.species == Species::Espeon || result.into.species == Species::Umbreon,
                "month {} hour {} gave {:?}",
                month,
                hour,
                result.into.species
            );
        }
    }

    #[test]
    fn time_of_day_is_reclassified_on_every_call() {
        let table = default_table().unwrap();
        let mut eevee = pokemon(Species::Eevee, Gender::Female, 30);
        eevee.friendship = 255;
        let party = solo_party(eevee);

        let day = EvolutionRuleEngine::new(&table, &DAY);
        let night = EvolutionRuleEngine::new(&table, &NIGHT);
        assert_eq!(day.check_level_up(&party, 0).unwrap().into.species, Species::Espeon);
        assert_eq!(night.check_level_up(&party, 0).unwrap().into.species, Species::Umbreon);
    }

    #[test]
    fn held_item_level_up_is_night_gated() {
        let table = default_table().unwrap();
        let mut gligar = pokemon(Species::Gligar, Gender::Male, 30);
        gligar.held_item = Some(Item::RazorFang);
        let party = solo_party(gligar);

        let day = EvolutionRuleEngine::new(&table, &DAY);
        assert_eq!(day.check_level_up(&party, 0), None);

        let night = EvolutionRuleEngine::new(&table, &NIGHT);
        let result = night.check_level_up(&party, 0).unwrap();
        assert_eq!(result.into.species, Species::Gliscor);
    }

    // --- Stat comparison family ---

    #[rstest]
    #[case(30, 10, Species::Hitmonlee)]
    #[case(10, 30, Species::Hitmonchan)]
    #[case(20, 20, Species::Hitmontop)]
    fn tyrogue_splits_on_attack_versus_defense(
        #[case] attack: u16,
        #[case] defense: u16,
        #[case] expected: Species,
    ) {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let mut tyrogue = pokemon(Species::Tyrogue, Gender::Male, 20);
        tyrogue.attack = attack;
        tyrogue.defense = defense;
        let party = solo_party(tyrogue);

        let result = engine.check_level_up(&party, 0).unwrap();
        assert_eq!(result.into.species, expected);
    }

    // --- Personality-value split ---

    #[rstest]
    #[case(0, Species::Silcoon)]
    #[case(4, Species::Silcoon)]
    #[case(5, Species::Cascoon)]
    #[case(9, Species::Cascoon)]
    fn wurmple_split_is_deterministic_per_personality_value(
        #[case] split_digit: u32,
        #[case] expected: Species,
    ) {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let mut wurmple = pokemon(Species::Wurmple, Gender::Female, 7);
        // Place the deciding digit in bits 16.. so (pid >> 16) % 10 == split_digit.
        wurmple.pid = split_digit << 16;
        let party = solo_party(wurmple);

        // Repeated evaluation always picks the same branch.
        for _ in 0..3 {
            let result = engine.check_level_up(&party, 0).unwrap();
            assert_eq!(result.into.species, expected);
        }
    }

    // --- Gendered level-up ---

    #[test]
    fn only_female_combee_evolves() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let female = solo_party(pokemon(Species::Combee, Gender::Female, 21));
        assert_eq!(
            engine.check_level_up(&female, 0).unwrap().into.species,
            Species::Vespiquen
        );

        let male = solo_party(pokemon(Species::Combee, Gender::Male, 21));
        assert_eq!(engine.check_level_up(&male, 0), None);
    }

    // --- Known-move family ---

    #[test]
    fn lickitung_needs_rollout_in_its_moveset() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let mut lickitung = pokemon(Species::Lickitung, Gender::Male, 33);
        lickitung.moves = [Some(Move::Tackle), None, None, None];
        let party = solo_party(lickitung.clone());
        assert_eq!(engine.check_level_up(&party, 0), None);

        lickitung.moves[1] = Some(Move::Rollout);
        let party = solo_party(lickitung);
        assert_eq!(
            engine.check_level_up(&party, 0).unwrap().into.species,
            Species::Lickilicky
        );
    }

    // --- Party-composition family ---

    #[test]
    fn mantyke_needs_another_party_member_that_is_a_remoraid() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let mut party = solo_party(pokemon(Species::Mantyke, Gender::Male, 25));
        assert_eq!(engine.check_level_up(&party, 0), None);

        party
            .push(pokemon(Species::Remoraid, Gender::Female, 12))
            .unwrap();
        assert_eq!(
            engine.check_level_up(&party, 0).unwrap().into.species,
            Species::Mantine
        );
    }

    #[test]
    fn party_composition_ignores_eggs_and_the_creature_itself() {
        let table = table_of(
            Species::Remoraid,
            vec![EvolutionCondition {
                method: EvolutionMethod::PartySpeciesLevelUp {
                    partner: Species::Remoraid,
                },
                into: EvolutionTarget {
                    species: Species::Mantine,
                    form: 0,
                },
            }],
        );
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        // Alone: the creature must not match itself.
        let mut party = solo_party(pokemon(Species::Remoraid, Gender::Male, 25));
        assert_eq!(engine.check_level_up(&party, 0), None);

        // An egg of the right species does not count either.
        let mut egg = pokemon(Species::Remoraid, Gender::Female, 1);
        egg.is_egg = true;
        party.push(egg).unwrap();
        assert_eq!(engine.check_level_up(&party, 0), None);

        // A hatched second Remoraid does.
        party
            .push(pokemon(Species::Remoraid, Gender::Female, 10))
            .unwrap();
        assert!(engine.check_level_up(&party, 0).is_some());
    }

    // --- Unhandled methods ---

    #[test]
    fn shedinja_and_beauty_methods_never_match() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        // Feebas only has the beauty rule, which the engine does not handle.
        let feebas = solo_party(pokemon(Species::Feebas, Gender::Female, 50));
        assert_eq!(engine.check_level_up(&feebas, 0), None);
    }

    // --- Item use ---

    #[test]
    fn stones_match_only_their_own_item() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let eevee = pokemon(Species::Eevee, Gender::Male, 5);

        let water = engine.check_item_use(&eevee, Item::WaterStone).unwrap();
        assert_eq!(water.into.species, Species::Vaporeon);
        let fire = engine.check_item_use(&eevee, Item::FireStone).unwrap();
        assert_eq!(fire.into.species, Species::Flareon);
        assert_eq!(engine.check_item_use(&eevee, Item::MoonStone), None);
    }

    #[test]
    fn gendered_stones_check_the_creature_gender() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let male = pokemon(Species::Kirlia, Gender::Male, 20);
        assert_eq!(
            engine.check_item_use(&male, Item::DawnStone).unwrap().into.species,
            Species::Gallade
        );
        let female = pokemon(Species::Kirlia, Gender::Female, 20);
        assert_eq!(engine.check_item_use(&female, Item::DawnStone), None);
    }

    #[test]
    fn day_night_held_items_also_work_when_used_directly() {
        // The Razor Fang can be consumed as an item outside the level-up
        // flow; the night gate still applies.
        let table = default_table().unwrap();
        let gligar = pokemon(Species::Gligar, Gender::Male, 30);

        let day = EvolutionRuleEngine::new(&table, &DAY);
        assert_eq!(day.check_item_use(&gligar, Item::RazorFang), None);

        let night = EvolutionRuleEngine::new(&table, &NIGHT);
        assert_eq!(
            night.check_item_use(&gligar, Item::RazorFang).unwrap().into.species,
            Species::Gliscor
        );
    }

    // --- Trade ---

    #[test]
    fn unconditional_trade_matches_any_partner() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let machoke = pokemon(Species::Machoke, Gender::Male, 40);

        let result = engine.check_trade(&machoke, Species::Pikachu).unwrap();
        assert_eq!(result.into.species, Species::Machamp);
    }

    #[test]
    fn item_trade_requires_the_held_item() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let mut onix = pokemon(Species::Onix, Gender::Male, 40);
        assert_eq!(engine.check_trade(&onix, Species::Pikachu), None);

        onix.held_item = Some(Item::MetalCoat);
        assert_eq!(
            engine.check_trade(&onix, Species::Pikachu).unwrap().into.species,
            Species::Steelix
        );
    }

    #[test]
    fn shelmet_and_karrablast_trade_evolve_symmetrically() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);

        let shelmet = pokemon(Species::Shelmet, Gender::Male, 30);
        let karrablast = pokemon(Species::Karrablast, Gender::Female, 30);

        assert_eq!(
            engine.check_trade(&shelmet, Species::Karrablast).unwrap().into.species,
            Species::Accelgor
        );
        assert_eq!(
            engine.check_trade(&karrablast, Species::Shelmet).unwrap().into.species,
            Species::Escavalier
        );
        // No other pairing triggers the special case.
        assert_eq!(engine.check_trade(&shelmet, Species::Pikachu), None);
        assert_eq!(engine.check_trade(&karrablast, Species::Karrablast), None);
    }

    // --- Purity ---

    #[test]
    fn evaluation_never_mutates_the_creature() {
        let table = default_table().unwrap();
        let engine = EvolutionRuleEngine::new(&table, &DAY);
        let mut eevee = pokemon(Species::Eevee, Gender::Female, 30);
        eevee.friendship = 255;
        let party = solo_party(eevee);
        let before = party.get(0).unwrap().clone();

        engine.check_level_up(&party, 0);
        engine.check_item_use(party.get(0).unwrap(), Item::WaterStone);
        engine.check_trade(party.get(0).unwrap(), Species::Pikachu);

        assert_eq!(party.get(0).unwrap(), &before);
    }
}
