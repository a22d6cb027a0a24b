use super::*;

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
    let runs = Rc::new(Cell::new(0));
    let make = {
        let runs = Rc::clone(&runs);
        move || {
            let runs = Rc::clone(&runs);
            Box::new(move || runs.set(runs.get() + 1)) as Box<dyn FnOnce()>
        }
    };
    (runs, make)
}

#[test]
fn only_latest_call_in_burst_runs() {
    let debounce = Debounce::new(120);
    let fired = Rc::new(Cell::new(""));

    let first = {
        let fired = Rc::clone(&fired);
        debounce.arm(move || fired.set("first"))
    };
    let second = {
        let fired = Rc::clone(&fired);
        debounce.arm(move || fired.set("second"))
    };
    first();
    assert_eq!(fired.get(), "");
    second();
    assert_eq!(fired.get(), "second");
}

#[test]
fn cancel_discards_armed_call() {
    let (runs, make) = counter();
    let debounce = Debounce::new(50);
    let armed = debounce.arm(make());
    debounce.cancel();
    armed();
    assert_eq!(runs.get(), 0);
}

#[test]
fn arming_after_cancel_runs() {
    let (runs, make) = counter();
    let debounce = Debounce::new(50);
    debounce.cancel();
    let armed = debounce.arm(make());
    armed();
    assert_eq!(runs.get(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn host_build_runs_each_call_immediately() {
    let (runs, make) = counter();
    let debounce = Debounce::new(120);
    for _ in 0..3 {
        debounce.call(make());
    }
    assert_eq!(runs.get(), 3);
}
