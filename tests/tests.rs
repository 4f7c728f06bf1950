use followpos_dfa::Dfa;
use serde_json::Value;

const INPUT: &str = include_str!("tests.json");

fn strings<'a>(test: &'a serde_json::Map<String, Value>, key: &str) -> Vec<&'a str> {
    match test.get(key) {
        Some(val) => val.as_array().unwrap().iter().map(|s| s.as_str().unwrap()).collect(),
        None => Vec::new(),
    }
}

#[test]
fn external_tests() {
    let val: Value = serde_json::from_str(INPUT).unwrap();
    let tests = val.as_array().unwrap();
    for test in tests {
        let test = test.as_object().unwrap();
        let re_str = test.get("pattern").unwrap().as_str().unwrap();
        println!("re: {:?}", re_str);

        if let Some(msg) = test.get("error") {
            let err = Dfa::from_regex(re_str).unwrap_err();
            assert_eq!(err.to_string(), msg.as_str().unwrap());
            continue;
        }

        let dfa = Dfa::from_regex(re_str).unwrap();
        for text in strings(test, "accept") {
            assert!(dfa.accepts(text), "{:?} should accept {:?}\n{:?}", re_str, text, dfa);
        }
        for text in strings(test, "reject") {
            assert!(!dfa.accepts(text), "{:?} should reject {:?}\n{:?}", re_str, text, dfa);
        }
    }
}
