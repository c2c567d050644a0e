use super::owned;
use lush::control_state::ControlFlow;
use lush::process::builtin::{BUILTIN_NAMES, Builtin};
use lush::process::help::Help;
use lush::sink::{BuiltinIo, Sink};

fn run_help(args: &[&str]) -> (ControlFlow, String, String) {
    let (mut out, out_buf) = Sink::buffer();
    let (mut err, err_buf) = Sink::buffer();
    let flow = Help::new().call(&owned(args), &mut BuiltinIo::new(&mut out, &mut err));
    let out = String::from_utf8(out_buf.borrow().clone()).unwrap();
    let err = String::from_utf8(err_buf.borrow().clone()).unwrap();
    (flow, out, err)
}

#[test]
fn help_lists_each_builtin_once() {
    let (flow, out, err) = run_help(&["help"]);

    assert_eq!(flow, ControlFlow::Continue);
    assert!(err.is_empty());
    for name in BUILTIN_NAMES {
        assert_eq!(out.matches(name).count(), 1, "{name} in {out:?}");
    }
}

#[test]
fn help_output_is_stable_across_calls() {
    let (_, first, _) = run_help(&["help"]);
    let (_, second, _) = run_help(&["help"]);
    let (_, with_operands, _) = run_help(&["help", "cd"]);

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first, with_operands);
}
