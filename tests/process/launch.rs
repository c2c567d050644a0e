use super::owned;
use lush::control_state::ControlFlow;
use lush::process::launch::launch;
use lush::sink::Sink;

#[test]
fn launch_continues_after_success_and_failure() {
    let (mut err, err_buf) = Sink::buffer();

    assert_eq!(launch(&owned(&["true"]), &mut err), ControlFlow::Continue);
    assert_eq!(launch(&owned(&["false"]), &mut err), ControlFlow::Continue);
    assert!(err_buf.borrow().is_empty());
}

#[test]
fn launch_reports_non_executable_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("not-executable");
    std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
    let (mut err, err_buf) = Sink::buffer();

    let flow = launch(&owned(&[script.to_str().unwrap()]), &mut err);

    assert_eq!(flow, ControlFlow::Continue);
    let err = String::from_utf8(err_buf.borrow().clone()).unwrap();
    assert_eq!(err.lines().count(), 1);
    assert!(err.starts_with("lush: "));
}

#[test]
fn launch_waits_for_the_child_to_finish() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("done");
    let script = format!("sleep 0.1; touch '{}'", marker.display());
    let (mut err, _) = Sink::buffer();

    launch(&owned(&["sh", "-c", &script]), &mut err);

    assert!(marker.exists());
}
