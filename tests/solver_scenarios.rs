use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_guesser::commands::{SimulationConfig, play_trial, run_simulation};
use wordle_guesser::core::{Feedback, FeedbackColor, Word};
use wordle_guesser::solver::{
    ConstraintSet, FrequencyTable, GameMode, GameSession, RoundOutcome, SessionConfig, SessionState,
    SolverError, pick_best_candidate, score_word,
};
use wordle_guesser::wordlists::{WORDS, load_from_file, words_from_slice};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/words.txt");

fn words(list: &[&str]) -> Vec<Word> {
    words_from_slice(list)
}

#[test]
fn exact_and_absent_feedback_leaves_only_target() {
    let dictionary = words(&["abcde", "abcxx", "xxcde"]);
    let target = Word::new("abcde").unwrap();
    let guess = Word::new("abcxx").unwrap();

    let feedback = Feedback::classify(&target, &guess);
    assert_eq!(
        feedback.colors(),
        &[
            FeedbackColor::Exact,
            FeedbackColor::Exact,
            FeedbackColor::Exact,
            FeedbackColor::Absent,
            FeedbackColor::Absent
        ]
    );

    let mut constraints = ConstraintSet::new();
    constraints.record(&guess, &feedback);
    let survivors = constraints.filter(dictionary);

    assert_eq!(survivors, vec![target]);
}

#[test]
fn repeated_letters_follow_containment_rule() {
    let target = Word::new("babab").unwrap();
    let guess = Word::new("aabbb").unwrap();
    assert_eq!(Feedback::classify(&target, &guess).to_codes(), "1,2,2,1,2");
}

#[test]
fn empty_candidates_report_no_candidate() {
    let table = FrequencyTable::compute(&words(&["crane"])).unwrap();
    assert_eq!(
        pick_best_candidate(&[], &table),
        Err(SolverError::NoCandidateAvailable)
    );
    assert_eq!(
        FrequencyTable::compute(&[]),
        Err(SolverError::NoCandidateAvailable)
    );
}

#[test]
fn classify_word_against_itself_is_all_exact() {
    for word in words_from_slice(WORDS) {
        assert!(Feedback::classify(&word, &word).is_solved(), "{word}");
    }
}

#[test]
fn filter_keeps_target_for_every_fixture_target() {
    let dictionary = load_from_file(FIXTURE).unwrap();
    for target in &dictionary {
        for guess in &dictionary {
            let mut constraints = ConstraintSet::new();
            constraints.record(guess, &Feedback::classify(target, guess));
            let survivors = constraints.filter(dictionary.clone());

            assert!(survivors.len() <= dictionary.len());
            assert!(survivors.contains(target), "{guess} vs {target}");
        }
    }
}

#[test]
fn frequency_counts_cover_every_candidate() {
    let dictionary = words_from_slice(WORDS);
    let table = FrequencyTable::compute(&dictionary).unwrap();

    assert_eq!(table.word_len(), 5);
    for ranking in table.positions() {
        assert_eq!(ranking.iter().map(|e| e.count).sum::<usize>(), dictionary.len());
        assert!(ranking.windows(2).all(|w| w[0].count >= w[1].count));
    }

    let best = pick_best_candidate(&dictionary, &table).unwrap();
    let best_score = score_word(best, &table);
    assert!(dictionary.iter().all(|w| score_word(w, &table) >= best_score));
}

#[test]
fn guess_counter_advances_once_per_round() {
    let dictionary = load_from_file(FIXTURE).unwrap();
    let target = Word::new("plant").unwrap();
    let mut session = GameSession::new(
        dictionary,
        SessionConfig::new(GameMode::ImprovedGuessing),
        StdRng::seed_from_u64(5),
    )
    .unwrap();

    let mut guess = session.start().unwrap().clone();
    let mut rounds = 0;
    while session.state() == SessionState::AwaitingFeedback {
        rounds += 1;
        let outcome = session
            .submit_feedback(&Feedback::classify(&target, &guess))
            .unwrap();
        assert_eq!(session.score(), rounds);
        if let RoundOutcome::Continue { next_guess, .. } = outcome {
            guess = next_guess;
        }
    }

    assert_eq!(session.state(), SessionState::Won);
}

#[test]
fn every_bundled_target_is_solved() {
    let dictionary = words_from_slice(WORDS);
    let config = SessionConfig::new(GameMode::ImprovedGuessing);

    for (i, target) in dictionary.iter().enumerate().step_by(7) {
        let result = play_trial(&dictionary, &config, target, StdRng::seed_from_u64(i as u64))
            .unwrap();
        assert!(result.outcome.is_solved(), "failed on {target}");
    }
}

#[test]
fn batch_simulation_over_fixture() {
    let dictionary = load_from_file(FIXTURE).unwrap();
    let mut config = SimulationConfig::new(SessionConfig::new(GameMode::ImprovedStart));
    config.rounds = 100;
    config.seed = Some(2024);

    let stats = run_simulation(&dictionary, &config, false).unwrap();

    assert_eq!(stats.total_trials, 100);
    assert_eq!(stats.failed, 0);
    assert!(stats.min_guesses >= 1);
    assert!(stats.max_guesses <= dictionary.len());
}
