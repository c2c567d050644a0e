use super::owned;
use lush::control_state::ControlFlow;
use lush::process::builtin::map::{BUILTINS, BuiltinMap};
use lush::process::builtin::{BUILTIN_NAMES, Builtin};
use lush::sink::{BuiltinIo, Sink};
use std::io::Write;

struct Echo {}

impl Builtin for Echo {
    fn call(&self, args: &[String], io: &mut BuiltinIo<'_>) -> ControlFlow {
        let _ = writeln!(io.out, "{}", args[1..].join(" "));
        ControlFlow::Continue
    }
}

#[test]
fn global_table_holds_every_builtin_name() {
    assert_eq!(BUILTINS.len(), BUILTIN_NAMES.len());
    for name in BUILTIN_NAMES {
        assert!(BUILTINS.contains(name), "{name} missing");
    }
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert!(BUILTINS.get("cd").is_some());
    assert!(BUILTINS.get("CD").is_none());
    assert!(BUILTINS.get("Exit").is_none());
    assert!(BUILTINS.get("cd ").is_none());
    assert!(BUILTINS.get("ls").is_none());
}

#[test]
fn populate_is_idempotent() {
    let mut map = BuiltinMap::new();
    assert!(map.is_empty());
    map.populate_func_map();
    map.populate_func_map();
    assert_eq!(map.len(), BUILTIN_NAMES.len());
}

#[test]
fn added_builtins_are_invoked_with_the_full_vector() {
    let mut map = BuiltinMap::new();
    map.add("echo", Box::new(Echo {}));
    let (mut out, out_buf) = Sink::buffer();
    let (mut err, _) = Sink::buffer();
    let mut io = BuiltinIo::new(&mut out, &mut err);

    let flow = map.invoke(&owned(&["echo", "a", "b"]), &mut io);

    assert_eq!(flow, Some(ControlFlow::Continue));
    assert_eq!(out_buf.borrow().as_slice(), b"a b\n");
    assert_eq!(map.invoke(&owned(&["missing"]), &mut io), None);
    assert_eq!(map.invoke(&[], &mut io), None);
}
