//! Integration tests for the bundled stories.

use wf_engine::{Ending, ScriptedPresenter, Session, SessionConfig, play_story};

#[test]
fn every_story_passes_the_completeness_check() {
    for story in wf_stories::all() {
        let registry = story
            .scenes()
            .unwrap_or_else(|e| panic!("{} failed to build: {e}", story.key()));
        registry.validate().unwrap();
        assert!(registry.contains(registry.intro()));
        assert!(registry.contains(registry.defeat()));
    }
}

#[test]
fn story_keys_are_unique() {
    let mut keys: Vec<String> = wf_stories::all()
        .iter()
        .map(|story| story.key().to_string())
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 4);
}

#[test]
fn always_picking_the_first_option_ends_every_story() {
    for story in wf_stories::all() {
        for seed in 0..8 {
            let mut answers = vec!["Tester".to_string()];
            answers.extend(std::iter::repeat_n("1".to_string(), 64));
            let mut port = ScriptedPresenter::new(answers);
            let config = SessionConfig::default().with_seed(seed);

            let outcome = play_story(story.as_ref(), &mut port, &config)
                .unwrap_or_else(|e| panic!("{} seed {seed}: {e}", story.key()));

            assert!(outcome.scenes_played > 0);
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed| {
        let story = wf_stories::find("air-skirmish").unwrap();
        let mut port = ScriptedPresenter::new(["Ace", "falcon", "brief", "stealth"]);
        let config = SessionConfig::default().with_seed(seed);
        play_story(story.as_ref(), &mut port, &config).unwrap();
        port.transcript().to_vec()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn a_failing_counter_routes_to_defeat_without_reaching_later_scenes() {
    let story = wf_stories::find("medieval-quest").unwrap();
    let mut port = ScriptedPresenter::new(["Kael", "1", "1", "2"]);
    let config = SessionConfig::default().with_seed(0);
    let mut session = Session::from_story(story.as_ref(), &mut port, &config).unwrap();

    // intro -> council (accept) -> forest
    session.step(&mut port).unwrap();
    session.step(&mut port).unwrap();
    // one hit from the bandits will finish the hero off
    session.state_mut().adjust([("health", -8)]);
    session.state_mut().remove_item("elder's shield");

    let outcome = session.run(&mut port).unwrap();

    assert_eq!(outcome.ending, Ending::Defeated);
    assert_eq!(outcome.last_scene.as_str(), "defeat");
    assert!(!port.saw("A small shrine appears"));
    assert!(!port.saw("The dragon uncoils"));
    assert_eq!(
        port.transcript()
            .iter()
            .filter(|line| *line == "Your adventure ends here.")
            .count(),
        1
    );
}
