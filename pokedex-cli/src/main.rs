mod ui;

use anyhow::anyhow;
use pokedex_sim::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

struct CliOptions {
    file: PathBuf,
    seed: Option<u64>,
    dump: bool,
}

fn usage() -> ! {
    eprintln!("Usage: pokedex-cli [dump] [--file pokedex.txt] [--seed SEED]");
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut file = PathBuf::from("pokedex.txt");
    let mut seed = None;
    let mut dump = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "dump" => dump = true,
            "--file" => {
                file = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow!("--file requires a path (e.g. --file pokedex.txt)")
                })?;
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                seed = Some(val.parse()?);
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow!("Unknown argument {other}")),
        }
    }
    Ok(CliOptions { file, seed, dump })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    if opts.dump {
        return dump_pokedex(&opts);
    }

    let dex = Pokedex::load_or_empty(&opts.file);
    println!("Successfully loaded {} Pokemon into the PokeDex.", dex.len());

    // Seeded runs replay exactly; otherwise each run draws fresh entropy.
    let mut rng = match opts.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut team = Team::new();

    loop {
        match ui::main_menu()? {
            ui::MenuChoice::ShowPokedex => ui::show_pokedex(&dex),
            ui::MenuChoice::ShowTeam => ui::show_team(&team),
            ui::MenuChoice::Catch => run_catch(&dex, &mut team, &mut rng)?,
            ui::MenuChoice::Battle => run_battle(&dex, &mut team, &mut rng)?,
            ui::MenuChoice::Train => run_training(&dex, &mut team, &mut rng)?,
            ui::MenuChoice::Exit => {
                println!("Exiting the game. Goodbye!");
                return Ok(());
            }
        }
    }
}

fn run_catch(dex: &Pokedex, team: &mut Team, rng: &mut SmallRng) -> anyhow::Result<()> {
    let rarity = ui::catch_menu()?;
    println!("You start to search");
    let Some(caught) = attempt_catch(rarity, dex, rng) else {
        println!("No {} Pokemon found.", rarity.label());
        return Ok(());
    };
    println!("You found a {}", caught.name);
    println!("You caught a {} with CP: {}!", caught.name, caught.cp);
    let name = caught.name.clone();
    match team.add_or_replace(caught) {
        AddOutcome::Inserted(_) => {
            println!("{name} has been added to your team in an open slot.");
        }
        AddOutcome::Replaced { removed, .. } => {
            println!(
                "{name} has been added to your team, replacing {} (CP: {}).",
                removed.name, removed.cp
            );
        }
        AddOutcome::Rejected => {
            println!(
                "Your team is full. {name} could not be added as there are no weaker Pokemon to replace."
            );
        }
    }
    Ok(())
}

fn run_battle(dex: &Pokedex, team: &mut Team, rng: &mut SmallRng) -> anyhow::Result<()> {
    if team.is_empty() {
        println!("Your team is empty.");
        return Ok(());
    }
    let Some(opponent) = generate_opponent(dex, rng) else {
        println!("There are no wild Pokemon to fight.");
        return Ok(());
    };
    println!(
        "You are going to fight {} with CP: {}",
        opponent.name, opponent.cp
    );
    ui::show_team(team);
    let slot = ui::choose_member(team, "battle")?;
    let member = team
        .get_mut(slot)
        .ok_or_else(|| anyhow!("chosen team slot is empty"))?;
    let name = member.name.clone();
    match fight(member, opponent.cp) {
        BattleOutcome::Win => println!("{name} wins the battle!"),
        BattleOutcome::Loss => {
            println!("Your {name} loses the battle and faints!");
            println!("You should replace it.");
        }
    }
    Ok(())
}

fn run_training(dex: &Pokedex, team: &mut Team, rng: &mut SmallRng) -> anyhow::Result<()> {
    if team.is_empty() {
        println!("Your team is currently empty.");
        return Ok(());
    }
    ui::show_team(team);
    let slot = ui::choose_member(team, "train")?;
    let member = team
        .get_mut(slot)
        .ok_or_else(|| anyhow!("chosen team slot is empty"))?;
    let Some(max_cp) = dex.max_cp(member.species_number) else {
        println!("{} has no PokeDex entry to train against.", member.name);
        return Ok(());
    };
    train(member, max_cp, rng);
    println!("{} has been trained! New CP: {}", member.name, member.cp);
    Ok(())
}

fn dump_pokedex(opts: &CliOptions) -> anyhow::Result<()> {
    let dex = Pokedex::load(&opts.file)?;
    let entries: Vec<CreatureRecord> = dex.iter().cloned().collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
