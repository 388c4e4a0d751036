//! Behaviour of the public classification API.

use sentiment::classify::{NEGATIVE, POSITIVE};
use sentiment::{analyze, classify, History, Label};

#[test]
fn test_reference_cases() {
    let cases = [
        ("", Label::Neutral),
        ("   ", Label::Neutral),
        ("This is good and great", Label::Positive),
        ("This is bad and terrible", Label::Negative),
        ("good bad", Label::Neutral),
        ("I disliked it", Label::Negative),
        ("GREAT!!!", Label::Positive),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(text), expected, "classify({text:?})");
    }
}

#[test]
fn test_substring_matches_inside_words() {
    // "sad" inside "sadly", "waste" inside "wasteful"
    assert_eq!(classify("Sadly it was wasteful"), Label::Negative);
    let analysis = analyze("Sadly it was wasteful");
    assert_eq!(analysis.negative_score, 2);
}

#[test]
fn test_no_keywords_is_neutral() {
    assert_eq!(classify("The meeting is at 10:30."), Label::Neutral);
    assert_eq!(classify("🙂🙃 ... ###"), Label::Neutral);
}

#[test]
fn test_every_keyword_scores_on_its_own() {
    for word in POSITIVE.words() {
        assert_eq!(classify(word), Label::Positive, "positive keyword {word}");
    }
    for word in NEGATIVE.words() {
        assert!(analyze(word).negative_score >= 1, "negative keyword {word}");
    }
}

#[test]
fn test_keywords_overlap_across_sets() {
    // "unsatisfied" also contains the positive keyword "satisfied"
    let analysis = analyze("unsatisfied");
    assert_eq!(analysis.positive_score, 1);
    assert_eq!(analysis.negative_score, 1);
    assert_eq!(analysis.label, Label::Neutral);
}

#[test]
fn test_result_depends_only_on_text() {
    let text = "Excellent service but a lousy, awful wait";
    let expected = classify(text);

    // Interleave unrelated calls; nothing carries over between them.
    for other in ["great", "bad", "", "neutral words"] {
        classify(other);
        assert_eq!(classify(text), expected);
    }
}

#[test]
fn test_threads_agree() {
    let text = "I love it, amazing and wonderful, no problem";
    let expected = classify(text);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || classify(text)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_history_newest_first() {
    let mut history = History::new();
    history.submit("A: superb");
    history.submit("");
    history.submit("B: garbage");

    let entries: Vec<_> = history.iter().map(|e| (e.text.as_str(), e.label)).collect();
    assert_eq!(
        entries,
        vec![("B: garbage", Label::Negative), ("A: superb", Label::Positive)]
    );
}
