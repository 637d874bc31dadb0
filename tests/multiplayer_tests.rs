use nrow_search::{
    Board, GameState, MaxN, Paranoid, SearchBudget, SearchError, Strategy,
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

fn three_player(rows: &[&str], current: usize) -> GameState<char> {
    GameState::with_current_player(board(rows), vec!['A', 'B', 'C'], current).unwrap()
}

#[test]
fn test_player_count_constraint() {
    let solo = GameState::new(Board::<char>::new(3), vec!['X']).unwrap();
    assert!(matches!(
        MaxN::new(solo.clone()),
        Err(SearchError::TooFewPlayers(1))
    ));
    assert!(matches!(
        Paranoid::new(solo),
        Err(SearchError::TooFewPlayers(1))
    ));
}

#[test]
fn test_max_n_completes_a_win() {
    let state = two_player(&["XX_", "O__", "O__"], 0);
    let mut search = MaxN::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_paranoid_completes_a_win() {
    let state = two_player(&["XX_", "O__", "O__"], 0);
    let mut search = Paranoid::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_max_n_blocks_in_the_two_player_scenario() {
    // X threatens the top row; O, at roster index 1, blocks at 2. With two
    // players blocking also maximizes O's own component, so MaxN agrees
    // with the adversarial searches here.
    let state = two_player(&["XX_", "O__", "O__"], 1);
    let mut search = MaxN::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

#[test]
fn test_paranoid_blocks_an_immediate_threat() {
    let state = two_player(&["OO_", "X__", "_X_"], 0);
    let mut search = Paranoid::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 2);
}

// C holds 6 and 7 and threatens the bottom row at 8. A moves before B and C.
//
// Paranoid treats B and C as a coalition against A: leaving 8 open lets the
// coalition finish A off two plies in, so blocking is the score-maximizing
// move. MaxN instead assumes B will block C to protect B's own component,
// so A sees no reason to spend its move on 8 and keeps the lowest-location
// tie-break. That non-blocking choice is the documented MaxN limitation.
const THREE_PLAYER_THREAT: &[&str] = &["A__", "_B_", "CC_"];

#[test]
fn test_paranoid_blocks_the_coalition_threat() {
    let state = three_player(THREE_PLAYER_THREAT, 0);
    let mut search = Paranoid::new(state).unwrap();
    assert_eq!(search.best_move().unwrap(), 8);
}

#[test]
fn test_max_n_does_not_block_the_third_player() {
    let state = three_player(THREE_PLAYER_THREAT, 0);
    let mut search = MaxN::new(state).unwrap();
    // First available location, not the block at 8.
    assert_eq!(search.best_move().unwrap(), 1);
}

#[test]
fn test_max_n_and_paranoid_find_the_fork() {
    // Same forced-win position the two-player searches solve: 6 forks the
    // 2-4-6 diagonal and the bottom row.
    let state = two_player(&["O__", "_XO", "__X"], 0);

    let mut max_n = MaxN::new(state.clone()).unwrap();
    assert_eq!(max_n.best_move().unwrap(), 6);

    let mut paranoid = Paranoid::new(state).unwrap();
    assert_eq!(paranoid.best_move().unwrap(), 6);
}

#[test]
fn test_depth_cutoff_applies_to_multiplayer_searches() {
    let budget = SearchBudget::default().with_max_depth(0);
    let state = two_player(&["O__", "_XO", "__X"], 0);

    // Beyond the horizon every line looks the same, so the tie-break keeps
    // the lowest location instead of the fork at 6.
    let mut max_n = MaxN::with_budget(state.clone(), budget.clone()).unwrap();
    assert_eq!(max_n.best_move().unwrap(), 1);

    let mut paranoid = Paranoid::with_budget(state, budget).unwrap();
    assert_eq!(paranoid.best_move().unwrap(), 1);
}

#[test]
fn test_best_move_on_terminal_state_fails() {
    let full = two_player(&["XOX", "XOO", "OXX"], 0);
    let mut max_n = MaxN::new(full.clone()).unwrap();
    assert!(matches!(
        max_n.best_move(),
        Err(SearchError::NoMovesAvailable)
    ));

    let mut paranoid = Paranoid::new(full).unwrap();
    assert!(matches!(
        paranoid.best_move(),
        Err(SearchError::NoMovesAvailable)
    ));
}
