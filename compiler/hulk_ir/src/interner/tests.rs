use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let max = interner.intern("Max");
    let min = interner.intern("Min");
    let max2 = interner.intern("Max");

    assert_eq!(max, max2);
    assert_ne!(max, min);

    assert_eq!(interner.lookup(max), "Max");
    assert_eq!(interner.lookup(min), "Min");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_builtins_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    interner.intern("sqrt");
    interner.intern("let");

    assert_eq!(interner.len(), before);
}

#[test]
fn test_unknown_name_resolves_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(u32::MAX)), "");
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let a = interner.intern("a");
    assert_eq!(interner2.intern("a"), a);
    assert_eq!(interner2.lookup(a), "a");
}
