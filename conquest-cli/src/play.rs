//! Interactive session loop - menu, map table, attack prompts
//!
//! ## Architecture (3-layer granularity)
//!
//! - Level 1: run() - session setup and menu loop
//! - Level 2: attack_phase(), report_mission(), report_final()
//! - Level 3: rendering and prompt utilities
//!
//! All invalid input (non-numeric, bad indices, too few troops) is
//! reported and re-prompted, never fatal to the session.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use conquest_core::{BattleOutcome, BattleReport, Board, Faction, Mission, Session, Territory};

type InputLines = io::Lines<io::StdinLock<'static>>;

// ============================================================================
// LEVEL 1 - SESSION LOOP
// ============================================================================

/// Run one interactive session to completion (victory or quit)
pub fn run(player: Faction, seed: Option<u64>, json: bool) -> Result<()> {
    let mut session = match seed {
        Some(seed) => Session::from_seed(player, seed),
        None => Session::start(player),
    };

    tracing::info!(
        "Session started: player={}, mission: {}",
        session.player(),
        session.mission().describe()
    );

    let mut input = io::stdin().lines();

    loop {
        render_turn(&session);
        // EOF on the menu prompt ends the session
        let Some(choice) = prompt_number("Choice: ", &mut input) else {
            break;
        };
        match choice {
            1 => {
                attack_phase(&mut session, &mut input);
                if session.mission_complete() {
                    println!("\n>>> MISSION COMPLETE! You win! <<<");
                    break;
                }
            }
            2 => report_mission(&session),
            0 => {
                println!("Leaving the session.");
                break;
            }
            _ => println!("Invalid option."),
        }
    }

    if json {
        report_final(&session)?;
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Prompt for attacker and defender, run one battle, narrate it
fn attack_phase(session: &mut Session, input: &mut InputLines) {
    let n = session.board().len();

    let Some(attacker) = prompt_number(&format!("Attacking territory (1-{n}): "), input) else {
        println!("Invalid input.");
        return;
    };
    let Some(defender) = prompt_number(&format!("Defending territory (1-{n}): "), input) else {
        println!("Invalid input.");
        return;
    };

    // Menu uses 1-based indices, the engine 0-based
    let (Some(attacker_idx), Some(defender_idx)) =
        (to_board_index(attacker), to_board_index(defender))
    else {
        println!("Invalid territory index.");
        return;
    };

    // Pre-battle snapshot for narration; attack() mutates the board
    let snapshot = session
        .board()
        .get(attacker_idx)
        .cloned()
        .zip(session.board().get(defender_idx).cloned());

    match session.attack(attacker_idx, defender_idx) {
        Err(err) => println!("{err}"),
        Ok(None) => println!("Defender has no troops left. Nothing to resolve."),
        Ok(Some(report)) => {
            if let Some((atk_before, def_before)) = snapshot {
                report_battle(
                    &atk_before,
                    &def_before,
                    session.board(),
                    attacker_idx,
                    defender_idx,
                    &report,
                );
            }
        }
    }
}

/// On-demand mission check (menu option 2)
fn report_mission(session: &Session) {
    if session.mission_complete() {
        println!("\n>>> MISSION COMPLETE! You win! <<<");
    } else {
        println!("\nMission not complete yet. Keep fighting!");
    }
}

/// Machine-readable final state for the --json flag
fn report_final(session: &Session) -> Result<()> {
    #[derive(Serialize)]
    struct SessionSummary<'a> {
        player: Faction,
        mission: Mission,
        mission_complete: bool,
        board: &'a Board,
    }

    let summary = SessionSummary {
        player: session.player(),
        mission: session.mission(),
        mission_complete: session.mission_complete(),
        board: session.board(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

// ============================================================================
// LEVEL 3 - RENDERING AND PROMPTS
// ============================================================================

fn render_turn(session: &Session) {
    println!("\n=========== CONQUEST ===========");
    println!("Player: {}", session.player());
    render_map(session.board());
    println!();
    println!("Current mission: {}", session.mission().describe());
    println!();
    render_menu();
}

fn render_map(board: &Board) {
    println!("\n------ MAP ------");
    println!("{:<3} {:<12} {:<10} {:<6}", "#", "Territory", "Army", "Troops");
    for (i, t) in board.territories().iter().enumerate() {
        println!("{:<3} {:<12} {:<10} {:<6}", i + 1, t.name, t.owner, t.troops);
    }
}

fn render_menu() {
    println!("------------- MENU -------------");
    println!("1 - Attack");
    println!("2 - Check mission");
    println!("0 - Quit");
    println!("--------------------------------");
}

fn report_battle(
    atk_before: &Territory,
    def_before: &Territory,
    board: &Board,
    attacker_idx: usize,
    defender_idx: usize,
    report: &BattleReport,
) {
    println!(
        "\nBATTLE: {} ({}, {}) ATTACKS {} ({}, {})",
        atk_before.name,
        atk_before.owner,
        atk_before.troops,
        def_before.name,
        def_before.owner,
        def_before.troops
    );
    println!(
        "Dice -> attacker: {} | defender: {}",
        report.attacker_roll, report.defender_roll
    );

    let attacker = &board.territories()[attacker_idx];
    let defender = &board.territories()[defender_idx];
    match report.outcome {
        BattleOutcome::AttackerHit => {
            println!(
                "Attacker wins the clash! Defender troops -1 (now {})",
                defender.troops
            );
        }
        BattleOutcome::Conquest => {
            println!("Attacker wins the clash! Defender troops -1 (now 0)");
            println!(
                ">>> TERRITORY CONQUERED! {} now rules {}.",
                attacker.owner, defender.name
            );
            println!(
                "One troop moved from the attacker (now {}) into the new territory (1).",
                attacker.troops
            );
        }
        BattleOutcome::DefenderHolds => {
            println!(
                "Defender resists! Attacker troops -1 (now {})",
                attacker.troops
            );
        }
    }
}

/// 1-based menu index to 0-based board index
fn to_board_index(value: i64) -> Option<usize> {
    usize::try_from(value.checked_sub(1)?).ok()
}

/// Print a prompt and read one number.
/// `None` on EOF or non-numeric input; callers report and re-prompt.
fn prompt_number(label: &str, input: &mut InputLines) -> Option<i64> {
    print!("{label}");
    let _ = io::stdout().flush();
    let line = input.next()?.ok()?;
    line.trim().parse().ok()
}
