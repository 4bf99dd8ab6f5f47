use super::*;

#[test]
fn length_is_unset_until_measured() {
    let mut b = Bar::new("Widget", 100, "Hardware");
    assert_eq!(b.length(), None);
    b.set_length(20);
    assert_eq!(b.length(), Some(20));
}

#[test]
fn setters_do_not_validate() {
    let mut b = Bar::default();
    b.set_label("");
    b.set_value(-5);
    b.set_category("Misc");
    assert_eq!(b.label(), "");
    assert_eq!(b.value(), -5);
    assert_eq!(b.category(), "Misc");
}

#[test]
fn render_layout() {
    let mut b = Bar::new("Gadget", 300, "Hardware");
    b.set_length(3);
    let line = b.render(Color::Green);

    assert!(line.starts_with("\x1b[7;32m   \x1b[0m"), "{line:?}");
    assert!(line.contains("\x1b[0;32mGadget\x1b[0m"));
    assert!(line.contains("\x1b[0;32m [\x1b[0m\x1b[0;32m300\x1b[0m\x1b[0;32m]\x1b[0m"));
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);
}

#[test]
fn ordering_is_by_value_then_reverse_category() {
    let small = Bar::new("a", 1, "x");
    let big = Bar::new("b", 2, "x");
    assert!(small < big);

    let alpha = Bar::new("same", 5, "Alpha");
    let beta = Bar::new("same", 5, "Beta");
    // Reverse category order: "Alpha" compares greater than "Beta".
    assert!(alpha > beta);

    let mut bars = vec![beta.clone(), small.clone(), alpha.clone(), big.clone()];
    bars.sort_by(|a, b| b.cmp(a));
    let order: Vec<(i64, &str)> = bars.iter().map(|b| (b.value(), b.category())).collect();
    assert_eq!(order, vec![(5, "Alpha"), (5, "Beta"), (2, "x"), (1, "x")]);
}

#[test]
fn equality_ignores_length() {
    let mut a = Bar::new("w", 10, "c");
    let b = Bar::new("w", 10, "c");
    a.set_length(4);
    assert_eq!(a, b);
}
