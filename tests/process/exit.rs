use super::owned;
use lush::control_state::ControlFlow;
use lush::process::builtin::Builtin;
use lush::process::exit::Exit;
use lush::sink::{BuiltinIo, Sink};

fn run_exit(args: &[&str]) -> (ControlFlow, usize) {
    let (mut out, out_buf) = Sink::buffer();
    let (mut err, err_buf) = Sink::buffer();
    let flow = Exit::new().call(&owned(args), &mut BuiltinIo::new(&mut out, &mut err));
    let written = out_buf.borrow().len() + err_buf.borrow().len();
    (flow, written)
}

#[test]
fn exit_terminates_without_output() {
    assert_eq!(run_exit(&["exit"]), (ControlFlow::Terminate, 0));
}

#[test]
fn exit_ignores_operands() {
    assert_eq!(run_exit(&["exit", "1"]), (ControlFlow::Terminate, 0));
    assert_eq!(run_exit(&["exit", "a", "b", "c"]), (ControlFlow::Terminate, 0));
}
