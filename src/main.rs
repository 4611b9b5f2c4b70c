use pokemon_evolution::{
    default_table, DefaultHost, EvolutionRuleEngine, FrameBuffer, Gender, Party, PartyPokemon,
    PendingEvolutionQueue, SceneDriver, Species, SystemClock,
};

fn main() {
    env_logger::init();

    // Evolution rules are external data; the compiled-in table covers the
    // built-in species set.
    let table = match default_table() {
        Ok(table) => table,
        Err(e) => {
            println!("Error loading evolution table: {}", e);
            return;
        }
    };

    // Example party: a max-friendship Eevee, a Nincada at the Ninjask
    // threshold, and a Remoraid to keep them company.
    let mut party = Party::new();
    let mut eevee = PartyPokemon::new(Species::Eevee, Gender::Female, 30);
    eevee.nickname = "Vee".to_string();
    eevee.friendship = 255;
    party.push(eevee).expect("party has room");
    let mut nincada = PartyPokemon::new(Species::Nincada, Gender::Male, 20);
    nincada.nickname = "Digger".to_string();
    party.push(nincada).expect("party has room");
    party
        .push(PartyPokemon::new(Species::Remoraid, Gender::Male, 12))
        .expect("party has room");

    // Example 1: evaluate level-up triggers for the whole party.
    let clock = SystemClock;
    let engine = EvolutionRuleEngine::new(&table, &clock);
    let mut queue = PendingEvolutionQueue::new();

    for index in 0..party.len() {
        let pkmn = party.get(index).expect("index in range");
        match engine.check_level_up(&party, index) {
            Some(condition) => {
                println!(
                    "{} can evolve into {}!",
                    pkmn.nickname,
                    condition.into.species.name()
                );
                queue.enqueue(index, condition);
            }
            None => println!("{} is not ready to evolve.", pkmn.nickname),
        }
    }
    println!();

    // Example 2: play every queued evolution as a cinematic, one frame at
    // a time, the way the overworld dispatcher would between battles.
    let mut host = DefaultHost::new();
    let mut driver = SceneDriver::new();
    let mut frame = FrameBuffer::new(160, 144);
    let mut frames = 0u32;
    let mut printed_messages = 0;

    while driver.start_next_pending(&mut queue, &party, &mut host) {
        while driver.is_active() {
            driver.logic_tick(&mut party, &mut host);
            driver.render_tick(&mut frame);
            frames += 1;
            while printed_messages < host.messages.len() {
                println!("  [msg] {}", host.messages[printed_messages]);
                printed_messages += 1;
            }
        }
    }

    for (species, _form) in &host.cries {
        println!("  [cry] {}", species.name());
    }
    println!();

    // Example 3: the party afterwards.
    println!("Party after {} frames of cinematics:", frames);
    for pkmn in party.iter() {
        println!(
            "  {} ({}) Lv.{}",
            pkmn.nickname,
            pkmn.species.name(),
            pkmn.level
        );
    }
}
