use seabattle::{
    model::{BoardModel, Coordinate, GameEvent, ShipId, ShotFired, ShotResult},
    view::{
        self, BoardCellComponent, CellState, Class, Document, GameBoardComponent, GameComponent,
        Tag, ViewError,
    },
    CellLocation,
};

#[test]
fn cell_paints_initial_state_on_run() {
    let mut doc = Document::new();
    let cell = view::run(BoardCellComponent::new(CellLocation::new(1, 2, 3)), &mut doc).unwrap();
    let node = doc.node(cell.element()).unwrap();
    assert_eq!(node.tag(), Tag::Cell);
    assert_eq!(node.text(), "");
    assert_eq!(node.class_names(), "cell unknown");
    assert_eq!(
        doc.click_target(cell.element()).unwrap(),
        Some(CellLocation::new(1, 2, 3))
    );
    assert_eq!(cell.state(), CellState::Unknown);
}

#[test]
fn cell_state_changes_repaint() {
    let mut doc = Document::new();
    let mut hit = view::run(BoardCellComponent::new(CellLocation::single(0, 0)), &mut doc).unwrap();
    hit.set_state(&mut doc, CellState::Hit).unwrap();
    assert_eq!(doc.node(hit.element()).unwrap().text(), "X");
    assert!(doc.node(hit.element()).unwrap().classes().contains(Class::Hit));
    assert!(!doc.node(hit.element()).unwrap().classes().contains(Class::Unknown));

    let mut miss = view::run(BoardCellComponent::new(CellLocation::single(0, 1)), &mut doc).unwrap();
    miss.set_state_named(&mut doc, "miss").unwrap();
    assert_eq!(doc.node(miss.element()).unwrap().text(), ".");
    assert_eq!(doc.node(miss.element()).unwrap().class_names(), "cell miss");
}

#[test]
fn invalid_state_leaves_cell_unchanged() {
    let mut doc = Document::new();
    let mut cell = view::run(BoardCellComponent::new(CellLocation::single(0, 0)), &mut doc).unwrap();
    cell.set_state(&mut doc, CellState::Miss).unwrap();

    assert_eq!(
        cell.set_state_named(&mut doc, "sunk"),
        Err(ViewError::InvalidState("sunk".to_owned()))
    );
    assert_eq!(cell.state(), CellState::Miss);
    assert_eq!(doc.node(cell.element()).unwrap().text(), ".");
}

#[test]
fn resolved_cells_do_not_change() {
    let mut doc = Document::new();
    let mut cell = view::run(BoardCellComponent::new(CellLocation::single(0, 0)), &mut doc).unwrap();
    cell.set_state(&mut doc, CellState::Hit).unwrap();
    // Same state again is fine.
    cell.set_state(&mut doc, CellState::Hit).unwrap();
    assert_eq!(
        cell.set_state(&mut doc, CellState::Unknown),
        Err(ViewError::InvalidTransition {
            from: CellState::Hit,
            to: CellState::Unknown,
        })
    );
    assert_eq!(cell.state(), CellState::Hit);
}

#[test]
fn state_names_round_trip() {
    for state in &[CellState::Unknown, CellState::Hit, CellState::Miss] {
        assert_eq!(state.as_str().parse::<CellState>(), Ok(*state));
    }
    assert_eq!(CellState::from(ShotResult::Hit), CellState::Hit);
    assert_eq!(CellState::from(ShotResult::Miss), CellState::Miss);
}

#[test]
fn board_builds_cells_in_row_major_order() {
    let mut doc = Document::new();
    let board = view::run(GameBoardComponent::new(1, 3), &mut doc).unwrap();
    let table = doc.node(board.element()).unwrap();
    assert_eq!(table.tag(), Tag::Table);
    assert_eq!(table.children().len(), 3);

    let locations: Vec<_> = board.cells().map(|cell| cell.location()).collect();
    assert_eq!(locations.len(), 9);
    assert_eq!(locations[0], CellLocation::new(1, 0, 0));
    assert_eq!(locations[1], CellLocation::new(1, 0, 1));
    assert_eq!(locations[3], CellLocation::new(1, 1, 0));

    let second_row = table.children()[1];
    let cell = board.cell(1, 2).unwrap();
    assert_eq!(doc.node(cell.element()).unwrap().parent(), Some(second_row));
}

#[test]
fn board_rejects_out_of_range_cells() {
    let mut doc = Document::new();
    let board = view::run(GameBoardComponent::new(0, 3), &mut doc).unwrap();
    assert_eq!(
        board.cell(0, 3).unwrap_err(),
        ViewError::InvalidCellAddress {
            row: 0,
            column: 3,
            size: 3
        }
    );
    assert!(board.cell(3, 0).is_err());
}

#[test]
fn board_rejects_huge_addresses() {
    let mut doc = Document::new();
    let mut board = view::run(GameBoardComponent::new(0, 10), &mut doc).unwrap();
    assert_eq!(
        board.cell(usize::MAX, 0).unwrap_err(),
        ViewError::InvalidCellAddress {
            row: usize::MAX,
            column: 0,
            size: 10
        }
    );
    assert!(board.cell(usize::MAX / 2, usize::MAX).is_err());
    assert!(board.cell_mut(0, usize::MAX).is_err());
}

fn shot(board_number: usize, row: usize, column: usize, result: ShotResult) -> GameEvent {
    GameEvent::ShotFired(ShotFired {
        board_number,
        row,
        column,
        result,
    })
}

#[test]
fn game_view_applies_shot_events() {
    let mut doc = Document::new();
    let mut game = view::run(GameComponent::with_sizes(vec![4, 4]), &mut doc).unwrap();
    assert_eq!(game.board_count(), 2);

    game.model_observer(&mut doc, &shot(1, 2, 3, ShotResult::Hit))
        .unwrap();
    assert_eq!(
        game.board(1).unwrap().cell(2, 3).unwrap().state(),
        CellState::Hit
    );
    assert_eq!(
        game.board(0).unwrap().cell(2, 3).unwrap().state(),
        CellState::Unknown
    );
}

#[test]
fn game_view_reports_desync() {
    let mut doc = Document::new();
    let mut game = view::run(GameComponent::with_sizes(vec![4]), &mut doc).unwrap();
    assert_eq!(
        game.model_observer(&mut doc, &shot(3, 0, 0, ShotResult::Miss)),
        Err(ViewError::BoardViewNotFound(3))
    );
    assert!(matches!(
        game.model_observer(&mut doc, &shot(0, 4, 0, ShotResult::Miss)),
        Err(ViewError::InvalidCellAddress { .. })
    ));
    assert!(matches!(
        game.model_observer(&mut doc, &shot(0, usize::MAX, 0, ShotResult::Miss)),
        Err(ViewError::InvalidCellAddress { .. })
    ));
}

fn some_ship() -> ShipId {
    let board = BoardModel::new(10).unwrap();
    let (id, _) = board.ship_at(Coordinate::new(0, 2)).unwrap().unwrap();
    id
}

#[test]
fn game_view_ignores_other_events() {
    let mut doc = Document::new();
    let mut game = view::run(GameComponent::with_sizes(vec![4]), &mut doc).unwrap();
    let before = doc.render_text(game.element()).unwrap();
    let sunk = GameEvent::ShipSunk {
        board_number: 7,
        ship: some_ship(),
    };
    game.model_observer(&mut doc, &sunk).unwrap();
    game.model_observer(&mut doc, &GameEvent::BoardDefeated { board_number: 7 })
        .unwrap();
    assert_eq!(doc.render_text(game.element()).unwrap(), before);
}

#[test]
fn document_rejects_cycles() {
    let mut doc = Document::new();
    let outer = doc.create_element(Tag::Div);
    let inner = doc.create_element(Tag::Div);
    doc.append_child(outer, inner).unwrap();
    assert_eq!(
        doc.append_child(inner, outer),
        Err(ViewError::InvalidHierarchy {
            parent: inner,
            child: outer
        })
    );
    assert!(doc.append_child(outer, outer).is_err());
}

#[test]
fn document_moves_reattached_nodes() {
    let mut doc = Document::new();
    let first = doc.create_element(Tag::Div);
    let second = doc.create_element(Tag::Div);
    let child = doc.create_element(Tag::Caption);
    doc.append_child(first, child).unwrap();
    doc.append_child(second, child).unwrap();
    assert!(doc.node(first).unwrap().children().is_empty());
    assert_eq!(doc.node(second).unwrap().children(), &[child]);
    assert_eq!(doc.node(child).unwrap().parent(), Some(second));
}

#[test]
fn render_shows_markers() {
    let mut doc = Document::new();
    let mut game = view::run(GameComponent::with_sizes(vec![3]), &mut doc).unwrap();
    game.model_observer(&mut doc, &shot(0, 1, 1, ShotResult::Hit))
        .unwrap();
    game.model_observer(&mut doc, &shot(0, 2, 0, ShotResult::Miss))
        .unwrap();
    let text = doc.render_text(game.element()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Board 0");
    assert_eq!(lines[1], "    0   1   2  ");
    assert_eq!(lines[2], " 0  ~~  ~~  ~~ ");
    assert_eq!(lines[3], " 1  ~~  X   ~~ ");
    assert_eq!(lines[4], " 2  .   ~~  ~~ ");
}
