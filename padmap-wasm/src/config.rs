use std::cell::RefCell;

thread_local! {
    static SERVER: RefCell<String> = RefCell::new(String::from("localhost:8080"));
}

pub fn server() -> String {
    SERVER.with(|s| s.borrow().clone())
}

pub fn set_server(addr: &str) {
    SERVER.with(|s| *s.borrow_mut() = addr.to_string());
}

fn format_url(server: &str, what: &str, deid: u32, bending: bool) -> String {
    format!("http://{server}/{what}?deid={deid}&bending={bending}")
}

/// `http://{server}/{what}?deid={deid}&bending={bending}` — both endpoints
/// share the host and the query.
pub fn build_url(what: &str, deid: u32, bending: bool) -> String {
    format_url(&server(), what, deid, bending)
}
