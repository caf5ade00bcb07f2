//! Console rendering and input prompts. Invalid input is re-prompted here
//! and never reaches the rule engine.

use anyhow::{bail, Result};
use pokedex_sim::model::Rarity;
use pokedex_sim::pokedex::Pokedex;
use pokedex_sim::team::Team;
use std::io::{self, Write};

const NAME_WIDTH: usize = 14;
const NUM_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuChoice {
    ShowPokedex,
    ShowTeam,
    Catch,
    Battle,
    Train,
    Exit,
}

pub fn main_menu() -> Result<MenuChoice> {
    loop {
        println!("What would you like to do?:");
        println!("1. Display Complete PokeDex");
        println!("2. Display your Team");
        println!("3. Search for a new Pokemon");
        println!("4. Battle your Pokemon");
        println!("5. Train your Pokemon");
        println!("6. Exit");
        match read_number()? {
            Some(1) => return Ok(MenuChoice::ShowPokedex),
            Some(2) => return Ok(MenuChoice::ShowTeam),
            Some(3) => return Ok(MenuChoice::Catch),
            Some(4) => return Ok(MenuChoice::Battle),
            Some(5) => return Ok(MenuChoice::Train),
            Some(6) => return Ok(MenuChoice::Exit),
            Some(_) => println!("Invalid choice. Please enter a number between 1 and 6."),
            None => println!("Invalid input. Please enter a number."),
        }
    }
}

pub fn catch_menu() -> Result<Rarity> {
    loop {
        println!("What rarity of Pokemon would you like to catch?:");
        println!("1. Common (High Probability)");
        println!("2. Uncommon (Normal Probability)");
        println!("3. Ultra Rare (Extremely Low Probability)");
        match read_number()? {
            Some(tier @ 1..=3) => {
                return Ok(Rarity::from_tier(tier as u32).expect("tier is in range"))
            }
            Some(_) => println!("Invalid choice. Please enter a number between 1 and 3."),
            None => println!("Invalid input. Please enter a number."),
        }
    }
}

/// Ask for a team member by displayed position; returns the backing slot
/// index.
pub fn choose_member(team: &Team, verb: &str) -> Result<usize> {
    let slots: Vec<usize> = team.members().map(|(slot, _)| slot).collect();
    loop {
        print!("Choose a Pokemon to {verb} (enter the number): ");
        io::stdout().flush()?;
        match read_number()? {
            Some(pos) if pos >= 1 && pos <= slots.len() => return Ok(slots[pos - 1]),
            Some(_) => println!(
                "Invalid choice. Please enter a number between 1 and {}.",
                slots.len()
            ),
            None => println!("Invalid input. Please enter a number."),
        }
    }
}

pub fn show_pokedex(dex: &Pokedex) {
    if dex.is_empty() {
        println!("The PokeDex is empty.");
        return;
    }
    for entry in dex.iter() {
        println!("{}. {}", entry.species_number, entry.name);
    }
}

pub fn show_team(team: &Team) {
    if team.is_empty() {
        println!("You have no team yet. Maybe search for a Pokemon?");
        return;
    }
    println!("Your Team:");
    println!(
        "{:<pos$}{:<name$}{:<num$}{:<num$}Rarity",
        "Pos",
        "Name",
        "Num",
        "CP",
        pos = NUM_WIDTH,
        name = NAME_WIDTH,
        num = NUM_WIDTH
    );
    for (position, (_, member)) in team.members().enumerate() {
        println!(
            "{:<pos$}{:<name$}{:<num$}{:<num$}{}",
            position + 1,
            member.name,
            member.species_number,
            member.cp,
            member.rarity.label(),
            pos = NUM_WIDTH,
            name = NAME_WIDTH,
            num = NUM_WIDTH
        );
    }
}

/// One trimmed line from stdin parsed as a number; `None` means the line
/// was not numeric.
fn read_number() -> Result<Option<usize>> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("stdin closed");
    }
    Ok(input.trim().parse().ok())
}
