#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use xeact_dom::Environment;

wasm_bindgen_test_configure!(run_in_browser);


async fn sleep(ms: u32) {
	TimeoutFuture::new(ms).await;
}

#[wasm_bindgen_test]
async fn only_the_last_action_runs() {
	web_log_::init();
	let debouncer = Environment::current().debounce(50).unwrap();
	let log = Rc::new(RefCell::new(Vec::new()));

	for name in vec!["a1", "a2", "a3"] {
		let log = Rc::clone(&log);
		debouncer.schedule(move || log.borrow_mut().push(name)).unwrap();
	}

	sleep(10).await;
	assert!(log.borrow().is_empty());

	sleep(150).await;
	assert_eq!(*log.borrow(), ["a3"]);
}

#[wasm_bindgen_test]
async fn a_single_action_runs_exactly_once() {
	web_log_::init();
	let debouncer = Environment::current().debounce(20).unwrap();
	let count = Rc::new(RefCell::new(0));
	{
		let count = Rc::clone(&count);
		debouncer.schedule(move || *count.borrow_mut() += 1).unwrap();
	}

	sleep(100).await;
	assert_eq!(*count.borrow(), 1);
}

#[wasm_bindgen_test]
async fn dropping_the_debouncer_cancels() {
	web_log_::init();
	let count = Rc::new(RefCell::new(0));
	{
		let debouncer = Environment::current().debounce(20).unwrap();
		let count = Rc::clone(&count);
		debouncer.schedule(move || *count.borrow_mut() += 1).unwrap();
	}

	sleep(100).await;
	assert_eq!(*count.borrow(), 0);
}

#[wasm_bindgen_test]
async fn debouncing_needs_no_window() {
	web_log_::init();
	let debouncer = Environment::headless().debounce(20).unwrap();
	let count = Rc::new(RefCell::new(0));
	for _ in 0..3 {
		let count = Rc::clone(&count);
		debouncer.schedule(move || *count.borrow_mut() += 1).unwrap();
	}

	sleep(100).await;
	assert_eq!(*count.borrow(), 1);
}
