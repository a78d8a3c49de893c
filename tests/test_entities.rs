use coin_collector::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 60, 35);
    assert_eq!(r.right(), 70);
    assert_eq!(r.bottom(), 55);
}

#[test]
fn progress_starts_at_stage_one() {
    let p = Progress::default();
    assert_eq!(p.stage, 1);
    assert_eq!(p.coins_in_stage, 0);
    assert_eq!(p.score, 0);
    assert_eq!(p.timer, 62); // 60 + stage * 2
}

#[test]
fn status_equality() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(
        GameStatus::GameOver(GameOverCause::TimeUp),
        GameStatus::GameOver(GameOverCause::Caught)
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { rect: Rect::new(370, 270, 60, 60) },
        coin: Coin { rect: Rect::new(0, 0, 35, 35) },
        roamers: Vec::new(),
        progress: Progress::default(),
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.progress.score = 999;
    cloned.roamers.push(Roamer {
        rect: Rect::new(5, 5, 50, 50),
        dir_x: 1,
        dir_y: 0,
        speed: 6,
    });

    assert_eq!(original.player.rect.x, 370);
    assert_eq!(original.progress.score, 0);
    assert!(original.roamers.is_empty());
    assert!(!original.is_over());
}
