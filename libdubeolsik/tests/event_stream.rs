//! Event stream behavior of the Dubeolsik engine.

use libdubeolsik::hangul::{SYLLABLE_BASE, SYLLABLE_COUNT};
use libdubeolsik::{
    decompose, CharacterEvent, Dubeolsik, Engine, Jamo, KeyLayout, KeyToken, TypingPlan,
};

fn jamo_event(jamo: Jamo) -> CharacterEvent {
    let keys = Dubeolsik.map_jamo(jamo.symbol()).unwrap();
    CharacterEvent::Jamo(libdubeolsik::JamoEvent::new(jamo, keys))
}

#[test]
fn annyeong_yields_six_jamo_events() {
    let events = Engine::new().build_event_stream("안녕");
    let expected = vec![
        jamo_event(Jamo::leading('ㅇ')),
        jamo_event(Jamo::vowel('ㅏ')),
        jamo_event(Jamo::trailing('ㄴ')),
        jamo_event(Jamo::leading('ㄴ')),
        jamo_event(Jamo::vowel('ㅕ')),
        jamo_event(Jamo::trailing('ㅇ')),
    ];
    assert_eq!(events, expected);

    let keys: Vec<String> = events.iter().map(|e| e.to_keystrokes()).collect();
    assert_eq!(keys, vec!["d", "k", "s", "s", "u", "d"]);
}

#[test]
fn mapper_examples() {
    assert_eq!(
        Dubeolsik.map_jamo('ㄲ').unwrap().tokens(),
        &[KeyToken::new('r', true)]
    );
    assert_eq!(
        Dubeolsik.map_jamo('ㅘ').unwrap().tokens(),
        &[KeyToken::new('h', false), KeyToken::new('k', false)]
    );
}

#[test]
fn non_hangul_is_one_direct_event() {
    let engine = Engine::new();
    for ch in ['!', 'A', ' ', '7', '\n', '漢', '😀'] {
        let events = engine.build_event_stream(&ch.to_string());
        assert_eq!(events, vec![CharacterEvent::Direct(ch)]);
    }
}

#[test]
fn mixed_text_keeps_order() {
    let events = Engine::new().build_event_stream("A 가!");
    assert_eq!(
        events,
        vec![
            CharacterEvent::Direct('A'),
            CharacterEvent::Direct(' '),
            jamo_event(Jamo::leading('ㄱ')),
            jamo_event(Jamo::vowel('ㅏ')),
            CharacterEvent::Direct('!'),
        ]
    );
}

#[test]
fn lone_compatibility_jamo_are_typed_by_key() {
    let events = Engine::new().build_event_stream("ㅋㅋㅠ");
    assert_eq!(
        events,
        vec![
            jamo_event(Jamo::unattached('ㅋ')),
            jamo_event(Jamo::unattached('ㅋ')),
            jamo_event(Jamo::unattached('ㅠ')),
        ]
    );
    assert_eq!(Engine::new().keystrokes("ㅋㅋㅠ"), "zzb");
}

#[test]
fn empty_input() {
    let engine = Engine::new();
    assert!(engine.build_event_stream("").is_empty());
    assert_eq!(engine.plan(""), TypingPlan::Empty);
    assert_eq!(engine.plain_plan(""), TypingPlan::Empty);
    assert_eq!(engine.keystrokes(""), "");
}

#[test]
fn plan_reports_counts() {
    match Engine::new().plan("값 ㅘ") {
        TypingPlan::Events(stream) => {
            assert_eq!(stream.jamo_events(), 4);
            assert_eq!(stream.direct_events(), 1);
            // ㄱ ㅏ ㅂㅅ + ㅗㅏ
            assert_eq!(stream.keystrokes(), 6);
        }
        TypingPlan::Empty => panic!("non-empty text planned as empty"),
    }
}

#[test]
fn keystroke_strings() {
    let engine = Engine::new();
    assert_eq!(engine.keystrokes("안녕하세요"), "dkssudgktpdy");
    assert_eq!(engine.keystrokes("값"), "rkqt");
    assert_eq!(engine.keystrokes("까치"), "Rkcl");
    assert_eq!(engine.keystrokes("얘기"), "dOrl");
    assert_eq!(engine.keystrokes("읽었다"), "dlfrdjTek");
    assert_eq!(engine.keystrokes("뭐해?"), "anjgo?");
}

#[test]
fn every_syllable_maps_to_jamo_events_only() {
    let engine = Engine::new();
    for ch in (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).filter_map(char::from_u32) {
        let events = engine.build_event_stream(&ch.to_string());
        let units = decompose(ch);
        assert_eq!(events.len(), units.len(), "{ch}");
        for (event, jamo) in events.iter().zip(units.iter()) {
            match event {
                CharacterEvent::Jamo(ev) => {
                    assert_eq!(ev.jamo, *jamo);
                    assert!(!ev.keys.is_empty());
                    assert_eq!(ev.keys.len(), if jamo.is_compound() { 2 } else { 1 }, "{jamo}");
                }
                CharacterEvent::Direct(_) => panic!("{ch} fell back to direct typing"),
            }
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let engine = Engine::new();
    let text = "다람쥐 헌 쳇바퀴에 타고파! ABC 123";
    assert_eq!(engine.build_event_stream(text), engine.build_event_stream(text));
    assert_eq!(engine.plan(text), engine.plan(text));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::new());
    let expected = engine.build_event_stream("동해물과 백두산이");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.build_event_stream("동해물과 백두산이"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
