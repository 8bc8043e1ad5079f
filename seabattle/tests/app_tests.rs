use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use seabattle::{
    config::MAX_BOARD_SIZE,
    launch,
    model::{GameError, ShotResult},
    view::{CellState, Tag, ViewError},
    CellLocation, ConfigError, Document, Error, GameConfig, GameEvent,
};

fn new_document() -> (Rc<RefCell<Document>>, seabattle::view::NodeId) {
    let document = Rc::new(RefCell::new(Document::new()));
    let root = document.borrow().root();
    (document, root)
}

#[test]
fn launch_mounts_view_under_container() {
    let (document, root) = new_document();
    let container = document.borrow_mut().create_element(Tag::Div);
    document.borrow_mut().append_child(root, container).unwrap();

    let app = launch(document.clone(), container, &GameConfig::default()).unwrap();
    assert_eq!(app.model().board_count(), 2);
    let doc = document.borrow();
    assert_eq!(doc.node(container).unwrap().children().len(), 1);
    let game_root = doc.node(container).unwrap().children()[0];
    assert_eq!(doc.node(game_root).unwrap().class_names(), "game");
}

#[test]
fn click_updates_the_clicked_cell_only() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::default()).unwrap();

    let node = app.cell_element(1, 0, 2).unwrap();
    assert_eq!(app.click(node).unwrap(), Some(ShotResult::Hit));
    assert_eq!(app.cell_state(1, 0, 2).unwrap(), CellState::Hit);
    assert_eq!(app.cell_state(0, 0, 2).unwrap(), CellState::Unknown);

    let node = app.cell_element(0, 5, 5).unwrap();
    assert_eq!(app.click(node).unwrap(), Some(ShotResult::Miss));
    assert_eq!(app.cell_state(0, 5, 5).unwrap(), CellState::Miss);
    assert_eq!(app.document().borrow().node(node).unwrap().text(), ".");

    // Clicking again changes nothing.
    assert_eq!(app.click(node).unwrap(), None);
    assert_eq!(app.cell_state(0, 5, 5).unwrap(), CellState::Miss);
}

#[test]
fn clicks_on_other_nodes_are_ignored() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::single()).unwrap();
    assert_eq!(app.click(root).unwrap(), None);
}

#[test]
fn single_board_game_plays_to_the_end() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::single()).unwrap();
    let sunk = Rc::new(RefCell::new(0));
    let counter = sunk.clone();
    app.add_observer(Rc::new(move |event: &GameEvent| -> anyhow::Result<()> {
        if let GameEvent::ShipSunk { .. } = event {
            *counter.borrow_mut() += 1;
        }
        Ok(())
    }));

    for column in 2..5 {
        assert_eq!(
            app.shoot(CellLocation::single(0, column)).unwrap(),
            Some(ShotResult::Hit)
        );
    }
    assert_eq!(*sunk.borrow(), 1);
    assert!(app.model().is_over());

    let text = app.render().unwrap();
    assert!(text.starts_with("Board 0\n"));
    assert_eq!(text.matches('X').count(), 3);
}

#[test]
fn view_keeps_up_when_another_observer_fails() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::single()).unwrap();
    app.add_observer(Rc::new(|_: &GameEvent| -> anyhow::Result<()> {
        Err(anyhow!("broken"))
    }));

    let node = app.cell_element(0, 3, 3).unwrap();
    assert!(matches!(
        app.click(node),
        Err(Error::Game(GameError::Observer(_)))
    ));
    assert_eq!(app.cell_state(0, 3, 3).unwrap(), CellState::Miss);
}

#[test]
fn observers_can_read_the_game_state() {
    let (document, root) = new_document();
    let app = Rc::new(launch(document, root, &GameConfig::single()).unwrap());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let handle = Rc::downgrade(&app);
    app.add_observer(Rc::new(move |event: &GameEvent| -> anyhow::Result<()> {
        let app = handle.upgrade().ok_or_else(|| anyhow!("game dropped"))?;
        sink.borrow_mut().push((event.name(), app.model().is_over()));
        Ok(())
    }));

    for column in 2..5 {
        app.shoot(CellLocation::single(0, column)).unwrap();
    }
    assert_eq!(seen.borrow().last(), Some(&("boardDefeated", true)));
    assert_eq!(app.cell_state(0, 0, 4).unwrap(), CellState::Hit);
}

#[test]
fn shooting_while_the_model_is_borrowed_fails() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::single()).unwrap();
    let model = app.model();
    assert!(matches!(
        app.shoot(CellLocation::single(0, 2)),
        Err(Error::Game(GameError::Busy))
    ));
    drop(model);
    assert_eq!(app.cell_state(0, 0, 2).unwrap(), CellState::Unknown);
}

#[test]
fn extra_observers_can_be_removed() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::single()).unwrap();
    let observers = app.model().observer_count();
    let id = app.add_observer(Rc::new(|_: &GameEvent| -> anyhow::Result<()> { Ok(()) }));
    assert_eq!(app.model().observer_count(), observers + 1);
    assert!(app.remove_observer(id));
    assert_eq!(app.model().observer_count(), observers);
}

#[test]
fn lookups_outside_the_game_fail() {
    let (document, root) = new_document();
    let app = launch(document, root, &GameConfig::default()).unwrap();
    assert!(matches!(
        app.cell_element(2, 0, 0),
        Err(Error::View(ViewError::BoardViewNotFound(2)))
    ));
    assert!(matches!(
        app.cell_element(0, 10, 0),
        Err(Error::View(ViewError::InvalidCellAddress { .. }))
    ));
    assert!(matches!(
        app.cell_element(0, usize::MAX / 4, 0),
        Err(Error::View(ViewError::InvalidCellAddress { .. }))
    ));
    assert!(matches!(
        app.shoot(CellLocation::new(2, 0, 0)),
        Err(Error::Game(GameError::InvalidBoardNumber { .. }))
    ));
}

#[test]
fn bad_configs_are_rejected() {
    let no_boards = GameConfig {
        board_count: 0,
        ..GameConfig::default()
    };
    assert_eq!(no_boards.validate(), Err(ConfigError::NoBoards));

    let tiny = GameConfig {
        board_size: 3,
        ..GameConfig::default()
    };
    assert!(matches!(tiny.validate(), Err(ConfigError::Layout { size: 3, .. })));

    let huge = GameConfig {
        board_size: 1_000_000,
        ..GameConfig::default()
    };
    assert_eq!(
        huge.validate(),
        Err(ConfigError::BoardTooLarge {
            size: 1_000_000,
            max: MAX_BOARD_SIZE
        })
    );
    assert!(matches!(huge.build(), Err(ConfigError::BoardTooLarge { .. })));

    let largest = GameConfig {
        board_size: MAX_BOARD_SIZE,
        board_count: 1,
        ..GameConfig::default()
    };
    assert_eq!(largest.validate(), Ok(()));

    let (document, root) = new_document();
    assert!(matches!(
        launch(document, root, &tiny),
        Err(Error::Config(ConfigError::Layout { .. }))
    ));
    let (document, root) = new_document();
    assert!(matches!(
        launch(document, root, &huge),
        Err(Error::Config(ConfigError::BoardTooLarge { .. }))
    ));
}
