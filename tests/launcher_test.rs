use island_happened::engine::GameApp;
use island_happened::engine_builder::EngineAttributes;
use island_happened::launcher::{self, ApplicationHost};
use island_happened::utils::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

const TITLE: &str = "My island has happened";

/// host that records every start instead of opening a window
#[derive(Default, Clone)]
struct RecordingHost {
    starts: Rc<RefCell<Vec<EngineAttributes>>>,
    fail: bool,
}

impl ApplicationHost for RecordingHost {
    fn start<A: GameApp>(self, _app: A, attributes: EngineAttributes) -> Result<(), Box<dyn Error>> {
        self.starts.borrow_mut().push(attributes);
        if self.fail {
            return Err("no display available".into());
        }
        Ok(())
    }
}

#[test]
fn desktop_configuration() {
    let attributes = launcher::desktop_attributes();
    assert_eq!(attributes.width(), VIEWPORT_WIDTH);
    assert_eq!(attributes.height(), VIEWPORT_HEIGHT);
    assert!(!attributes.resizable());
    assert_eq!(attributes.title(), TITLE);
}

#[test]
fn arguments_do_not_change_the_configuration() {
    let argument_sets: Vec<Vec<String>> = vec![
        vec![],
        vec!["--fullscreen".into()],
        vec!["-w".into(), "1920".into(), "-h".into(), "1080".into()],
        vec!["".into(), "🌴".into()],
    ];
    for args in argument_sets {
        let host = RecordingHost::default();
        launcher::launch(host.clone(), args).unwrap();
        let starts = host.starts.borrow();
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0], launcher::desktop_attributes());
    }
}

#[cfg(unix)]
#[test]
fn arguments_that_are_not_unicode_are_ignored() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let host = RecordingHost::default();
    let args = vec![OsString::from("island"), OsString::from_vec(vec![0x62, 0xff])];
    launcher::launch(host.clone(), args).unwrap();

    let starts = host.starts.borrow();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0], launcher::desktop_attributes());
}

#[test]
fn custom_viewport_is_passed_once() {
    let host = RecordingHost::default();
    launcher::launch_viewport(host.clone(), std::iter::empty::<String>(), 800, 600).unwrap();

    let starts = host.starts.borrow();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].width(), 800);
    assert_eq!(starts[0].height(), 600);
    assert!(!starts[0].resizable());
    assert_eq!(starts[0].title(), TITLE);
}

#[test]
fn host_failure_propagates_without_retry() {
    let host = RecordingHost {
        fail: true,
        ..Default::default()
    };
    let result = launcher::launch(host.clone(), ["island"]);
    let error = result.unwrap_err();
    assert_eq!(error.to_string(), "no display available");
    assert_eq!(host.starts.borrow().len(), 1);
}

#[test]
fn engine_rejects_an_empty_window() {
    let result = launcher::window_attributes(0, 600)
        .build_engine::<island_happened::game::IslandApp>();
    assert!(result.is_err());
}
