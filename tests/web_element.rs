#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlInputElement, Text};
use xeact_dom::{clear, Child, Children, Descriptor, Environment, Error, Properties};

wasm_bindgen_test_configure!(run_in_browser);


fn environment() -> Environment {
	web_log_::init();
	let environment = Environment::current();
	assert!(environment.has_document());
	assert!(environment.has_window());
	environment
}

fn property(target: &Element, name: &str) -> JsValue {
	Reflect::get(target, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn assigns_properties() {
	let environment = environment();
	let properties = Properties::new()
		.with("id", "name-field")
		.with("className", "wide primary")
		.with("value", "Ferris")
		.with("disabled", true)
		.with("maxLength", 12);
	let input = environment.tag("input", properties, ()).unwrap().unwrap();

	assert_eq!(input.tag_name(), "INPUT");
	assert_eq!(input.id(), "name-field");
	assert_eq!(input.class_name(), "wide primary");
	assert_eq!(property(&input, "disabled"), JsValue::TRUE);
	assert_eq!(property(&input, "maxLength").as_f64(), Some(12.0));

	let input: HtmlInputElement = input.dyn_into().unwrap();
	assert_eq!(input.value(), "Ferris");
}

#[wasm_bindgen_test]
fn later_duplicates_win() {
	let environment = environment();
	let mut properties = Properties::new();
	properties.insert("title", "first");
	properties.insert("title", "second");
	let div = environment.tag("div", properties, ()).unwrap().unwrap();
	assert_eq!(property(&div, "title").as_string().as_deref(), Some("second"));
}

#[wasm_bindgen_test]
fn appends_children_in_order() {
	let environment = environment();
	let item = environment.tag("li", [("textContent", "three")], ()).unwrap().unwrap();
	let list = environment
		.tag("ul", (), vec![environment.text("one"), Child::from(" two "), Child::from(item.clone())])
		.unwrap()
		.unwrap();

	let child_nodes = list.child_nodes();
	assert_eq!(child_nodes.length(), 3);
	assert!(child_nodes.get(0).unwrap().dyn_ref::<Text>().is_some());
	assert!(child_nodes.get(1).unwrap().dyn_ref::<Text>().is_some());
	assert_eq!(child_nodes.get(2).unwrap(), web_sys::Node::from(item));
	assert_eq!(list.text_content().as_deref(), Some("one two three"));
}

#[wasm_bindgen_test]
fn single_child_equals_one_element_sequence() {
	let environment = environment();
	let single = environment.tag("p", (), "alone").unwrap().unwrap();
	let sequence = environment.tag("p", (), ["alone"]).unwrap().unwrap();
	assert_eq!(single.outer_html(), sequence.outer_html());

	let nested_single = environment.tag("div", (), environment.element("b", (), "x").unwrap()).unwrap().unwrap();
	let nested_sequence = environment
		.tag("div", (), Children::from(vec![environment.element("b", (), "x").unwrap().unwrap()]))
		.unwrap()
		.unwrap();
	assert_eq!(nested_single.outer_html(), "<div><b>x</b></div>");
	assert_eq!(nested_single.outer_html(), nested_sequence.outer_html());
}

#[wasm_bindgen_test]
fn components_get_properties_but_not_children() {
	let environment = environment();
	let built = environment
		.element(
			Descriptor::component(|properties| {
				let label = properties.get("label").and_then(|label| label.as_str()).unwrap_or_default().to_owned();
				Environment::current().element("button", [("textContent", label)], ())
			}),
			[("label", "Save")],
			"ignored",
		)
		.unwrap()
		.and_then(Child::into_node)
		.unwrap();

	let button: Element = built.dyn_into().unwrap();
	assert_eq!(button.outer_html(), "<button>Save</button>");
}

#[wasm_bindgen_test]
fn missing_document_yields_none_even_in_a_page() {
	let environment = Environment::new(None, web_sys::window());
	assert_eq!(environment.element("div", (), "text").unwrap(), None);
	assert_eq!(environment.text("text"), Child::Text("text".to_owned()));
}

#[wasm_bindgen_test]
fn text_nodes_carry_their_data() {
	let environment = environment();
	let text: Text = environment.text("Hello xeact-dom!").into_node().unwrap().dyn_into().unwrap();
	assert_eq!(text.data(), "Hello xeact-dom!");
}

#[wasm_bindgen_test]
fn platform_errors_propagate() {
	let environment = environment();
	assert!(matches!(environment.tag("not a tag", (), ()), Err(Error::Platform(_))));
	// `tagName` is a getter without setter.
	assert!(matches!(environment.tag("div", [("tagName", "SPAN")], ()), Err(Error::Platform(_))));
}

#[wasm_bindgen_test]
fn component_errors_propagate() {
	let environment = environment();
	let built = environment.element(
		Descriptor::component(|properties| {
			let inner = Environment::current().tag("not a tag", properties, ())?;
			Ok(inner.map(Child::from))
		}),
		(),
		(),
	);
	assert!(matches!(built, Err(Error::Platform(_))));
}

#[wasm_bindgen_test]
fn properties_are_assigned_in_insertion_order() {
	let environment = environment();
	let markup_last = environment
		.tag("p", Properties::new().with("textContent", "<b>plain</b>").with("innerHTML", "<b>bold</b>"), ())
		.unwrap()
		.unwrap();
	assert_eq!(markup_last.inner_html(), "<b>bold</b>");

	let text_last = environment
		.tag("p", Properties::new().with("innerHTML", "<b>bold</b>").with("textContent", "<b>plain</b>"), ())
		.unwrap()
		.unwrap();
	assert_eq!(text_last.inner_html(), "&lt;b&gt;plain&lt;/b&gt;");
}

#[wasm_bindgen_test]
fn clear_removes_every_child() {
	let environment = environment();
	let list = environment
		.tag("ol", (), (0..5).map(|i| environment.element("li", (), i.to_string()).unwrap()).flatten().collect::<Children>())
		.unwrap()
		.unwrap();
	assert_eq!(list.child_element_count(), 5);

	clear(&list).unwrap();
	assert_eq!(list.child_nodes().length(), 0);

	// Idempotent on empty containers.
	clear(&list).unwrap();
	assert!(!list.has_child_nodes());
}
