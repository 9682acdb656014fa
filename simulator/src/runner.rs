use tictactoe_engine::{
    calculate_move, calculate_random_move, log, Board, GameState, Mark, SessionRng, BOARD_SIZE,
};

use crate::config::SimulatorConfig;
use crate::report::{GameOutcome, RunReport};

/// Plays the configured number of games and tallies the outcomes.
pub fn run_trials(config: &SimulatorConfig, rng: &mut SessionRng) -> Result<RunReport, String> {
    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;
    let mut outcomes = Vec::new();
    let mut final_boards = Vec::new();

    for game in 1..=config.games {
        log!("Starting game {}", game);
        let state = play_one_game(config, rng)?;

        match state.winner() {
            Some(Mark::X) => {
                x_wins += 1;
                log!("Result of game {}: X won!", game);
            }
            Some(Mark::O) => {
                o_wins += 1;
                log!("Result of game {}: O won!", game);
            }
            None => {
                draws += 1;
                log!("Result of game {}: It's a draw!", game);
            }
        }

        if config.show_boards {
            log!("Final board of game {}:\n{}", game, state.board());
        }

        outcomes.push(GameOutcome {
            game,
            status: state.status(),
            moves: state.history().len() as u32,
            final_board: state.board().to_string(),
        });
        final_boards.push(state.board().clone());
    }

    log!(
        "Final boards after {} games:\n{}",
        config.games,
        render_boards_side_by_side(&final_boards)
    );
    log!("Final results after {} games:", config.games);
    log!("X wins: {}", x_wins);
    log!("O wins: {}", o_wins);
    log!("Draws: {}", draws);

    Ok(RunReport {
        seed: rng.seed(),
        games: config.games,
        x_bot: config.x_bot,
        o_bot: config.o_bot,
        random_opening: config.random_opening,
        x_wins,
        o_wins,
        draws,
        outcomes,
    })
}

/// One game from an empty board to termination. With `random_opening`
/// set, X's first move is drawn at random regardless of X's bot, and
/// the configured bots take over from there.
pub fn play_one_game(
    config: &SimulatorConfig,
    rng: &mut SessionRng,
) -> Result<GameState, String> {
    let mut state = GameState::new();

    if config.random_opening
        && let Some(mv) = calculate_random_move(&state, rng)
    {
        state.place_mark(mv)?;
    }

    while !state.is_over() {
        let bot_type = match state.current_mark() {
            Mark::X => config.x_bot,
            Mark::O => config.o_bot,
        };
        let Some(mv) = calculate_move(bot_type, &state, rng) else {
            break;
        };
        state.place_mark(mv)?;
    }

    Ok(state)
}

/// Renders all final boards next to each other, three cell rows across
/// every game, the way the run summary shows them.
pub fn render_boards_side_by_side(boards: &[Board]) -> String {
    let mut lines = Vec::new();

    for row in 0..BOARD_SIZE {
        let cells_line: Vec<String> = boards.iter().map(|board| board_row(board, row)).collect();
        lines.push(cells_line.join("     "));

        if row + 1 < BOARD_SIZE {
            lines.push(vec!["-".repeat(9); boards.len()].join("     "));
        }
    }

    lines.join("\n")
}

fn board_row(board: &Board, row: usize) -> String {
    let cells: Vec<&str> = (0..BOARD_SIZE)
        .map(|col| match board.get(row, col) {
            Some(Mark::X) => "X",
            Some(Mark::O) => "O",
            None => ".",
        })
        .collect();
    cells.join(" | ")
}
