use nrow_search::{
    AlphaBeta, Board, GameState, Minimax, SearchBudget, SearchError, Strategy,
};

fn board(rows: &[&str]) -> Board<char> {
    let dimension = rows.len();
    let cells = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == '_' { None } else { Some(c) })
        .collect();
    Board::from_cells(dimension, cells).unwrap()
}

fn two_player(rows: &[&str], current: usize) -> GameState<char> {
    GameState::with_current_player(board(rows), vec!['X', 'O'], current).unwrap()
}

#[test]
fn test_two_player_constraint() {
    let state = GameState::new(Board::<char>::new(3), vec!['X', 'O', 'Y']).unwrap();
    assert!(matches!(
        Minimax::new(state.clone()),
        Err(SearchError::NotTwoPlayers(3))
    ));
    assert!(matches!(
        AlphaBeta::new(state),
        Err(SearchError::NotTwoPlayers(3))
    ));
}

#[test]
fn test_best_move_on_terminal_state_fails() {
    let state = two_player(&["XOX", "XOO", "OXX"], 0);
    let mut search = Minimax::new(state).unwrap();
    assert!(matches!(
        search.best_move(),
        Err(SearchError::NoMovesAvailable)
    ));
}

#[test]
fn test_minimax_completes_a_win() {
    // X holds 0 and 1; location 2 finishes the top row.
    let state = two_player(&["XX_", "O__", "O__"], 0);
    let mut search = Minimax::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_alpha_beta_completes_a_win() {
    let state = two_player(&["XX_", "O__", "O__"], 0);
    let mut search = AlphaBeta::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_minimax_blocks_an_immediate_threat() {
    // O threatens the top row at 2; X has no win of its own.
    let state = two_player(&["OO_", "X__", "_X_"], 0);
    let mut search = Minimax::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_alpha_beta_blocks_an_immediate_threat() {
    let state = two_player(&["OO_", "X__", "_X_"], 0);
    let mut search = AlphaBeta::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_blocking_scenario_as_second_player() {
    // X threatens the top row; O, at roster index 1, must block at 2.
    let state = two_player(&["XX_", "O__", "O__"], 1);

    let mut minimax = Minimax::new(state.clone()).unwrap();
    assert_eq!(minimax.best_move().unwrap(), 2);

    let mut alpha_beta = AlphaBeta::new(state).unwrap();
    assert_eq!(alpha_beta.best_move().unwrap(), 2);
}

#[test]
fn test_minimax_finds_a_fork() {
    // X to move. 6 creates threats on both the 2-4-6 diagonal and the
    // bottom row, forcing a win two plies later.
    let state = two_player(&["O__", "_XO", "__X"], 0);
    let mut search = Minimax::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 6);
}

#[test]
fn test_depth_cutoff_hides_the_deep_win() {
    // Same fork position, but the horizon ends before the win is reachable:
    // every line scores as a draw and the tie-break keeps the lowest location.
    let budget = SearchBudget::default().with_max_depth(0);
    let state = two_player(&["O__", "_XO", "__X"], 0);

    let mut minimax = Minimax::with_budget(state.clone(), budget.clone()).unwrap();
    assert_eq!(minimax.best_move().unwrap(), 1);

    let mut alpha_beta = AlphaBeta::with_budget(state, budget).unwrap();
    assert_eq!(alpha_beta.best_move().unwrap(), 1);
}

#[test]
fn test_pruning_never_changes_the_chosen_move() {
    let positions = [
        (["XX_", "O__", "O__"], 0),
        (["XX_", "O__", "O__"], 1),
        (["OO_", "X__", "_X_"], 0),
        (["O__", "_XO", "__X"], 0),
        (["X__", "_O_", "___"], 0),
        (["XO_", "_X_", "___"], 1),
        (["_O_", "OXX", "___"], 0),
    ];

    for (rows, current) in positions {
        let state = two_player(&rows, current);
        let mut minimax = Minimax::new(state.clone()).unwrap();
        let mut alpha_beta = AlphaBeta::new(state).unwrap();
        assert_eq!(
            minimax.best_move().unwrap(),
            alpha_beta.best_move().unwrap(),
            "strategies disagreed on {:?} with player {}",
            rows,
            current
        );
    }
}
