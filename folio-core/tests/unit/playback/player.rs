use super::*;

#[test]
fn defaults_match_page_behavior() {
    let s = PlaybackSettings::default();
    assert_eq!(s.frame_ms, 800);
    assert_eq!(s.button_label, "▶ View Career Roadmap");
    assert!(s.from_current);
    s.validate().unwrap();

    let parsed: PlaybackSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, s);
}

#[test]
fn zero_interval_is_rejected() {
    let s = PlaybackSettings {
        frame_ms: 0,
        ..PlaybackSettings::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn ticks_through_every_frame_once_then_holds() {
    let mut p = FramePlayer::new(3, &PlaybackSettings::default());
    assert_eq!(p.tick(), None);

    p.play();
    assert_eq!(p.tick(), Some(0));
    assert_eq!(p.tick(), Some(1));
    assert_eq!(p.tick(), Some(2));
    assert_eq!(p.state(), PlayerState::Finished);
    assert_eq!(p.tick(), None);
    assert_eq!(p.current(), Some(2));
}

#[test]
fn zero_frames_is_a_no_op() {
    let mut p = FramePlayer::new(0, &PlaybackSettings::default());
    p.play();
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.tick(), None);
    assert_eq!(p.current(), None);
    assert!(FramePlayer::schedule(0, &PlaybackSettings::default()).is_empty());
}

#[test]
fn resume_continues_from_current_frame() {
    let mut p = FramePlayer::new(4, &PlaybackSettings::default());
    p.play();
    p.tick();
    p.tick();
    p.pause();
    assert_eq!(p.tick(), None);
    p.play();
    assert_eq!(p.tick(), Some(2));
}

#[test]
fn rewind_when_not_resuming() {
    let settings = PlaybackSettings {
        from_current: false,
        ..PlaybackSettings::default()
    };
    let mut p = FramePlayer::new(4, &settings);
    p.play();
    p.tick();
    p.tick();
    p.pause();
    p.play();
    assert_eq!(p.tick(), Some(0));
}

#[test]
fn finished_player_restarts() {
    let mut p = FramePlayer::new(1, &PlaybackSettings::default());
    p.play();
    assert_eq!(p.tick(), Some(0));
    assert_eq!(p.state(), PlayerState::Finished);
    p.play();
    assert_eq!(p.tick(), Some(0));
}

#[test]
fn schedule_spaces_frames_by_interval() {
    let s = PlaybackSettings::default();
    assert_eq!(
        FramePlayer::schedule(3, &s),
        vec![(0, 0), (1, 800), (2, 1600)]
    );
}
