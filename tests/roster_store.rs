use proptest::prelude::*;
use tabsplit::{Friend, Money, Roster, Session, SessionMode};

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    ToggleAddForm,
    Add(String),
    Apply(usize, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Select),
        Just(Op::ToggleAddForm),
        "[a-z]{0,4}".prop_map(Op::Add),
        (0usize..8, -500i64..=500).prop_map(|(i, d)| Op::Apply(i, d)),
    ]
}

fn balances(session: &Session) -> Vec<Money> {
    session.roster().iter().map(Friend::balance).collect()
}

proptest! {
    #[test]
    fn add_form_and_selection_are_exclusive(ops in prop::collection::vec(op(), 0..40)) {
        let mut session = Session::new(Roster::seeded());
        for op in ops {
            let len = session.roster().len();
            match op {
                Op::Select(i) => {
                    if let Some(id) = session.roster().get_index(i % len).map(Friend::id) {
                        session.select_friend(id);
                    }
                }
                Op::ToggleAddForm => {
                    session.toggle_add_form();
                }
                Op::Add(name) => {
                    let added = session.add_friend(&name, "https://i.pravatar.cc/48").is_ok();
                    prop_assert_eq!(added, !name.is_empty());
                    prop_assert_eq!(session.roster().len(), len + usize::from(added));
                }
                Op::Apply(i, delta) => {
                    let id = session.roster().get_index(i % len).map(Friend::id).unwrap();
                    let before = balances(&session);
                    prop_assert!(session.apply_balance_delta(id, Money::new(delta)).is_ok());
                    let after = balances(&session);
                    for (idx, (b, a)) in before.iter().zip(&after).enumerate() {
                        if idx == i % len {
                            prop_assert_eq!(*a, *b + Money::new(delta));
                        } else {
                            prop_assert_eq!(a, b);
                        }
                    }
                    prop_assert_eq!(session.selected_id(), None);
                }
            }
            prop_assert!(!(session.is_add_form_open() && session.selected_id().is_some()));
        }
    }

    #[test]
    fn select_twice_clears(index in 0usize..3) {
        let mut session = Session::new(Roster::seeded());
        let id = session.roster().get_index(index).unwrap().id();
        session.select_friend(id);
        session.select_friend(id);
        prop_assert_eq!(session.mode(), SessionMode::Browsing);
    }
}

#[test]
fn roster_keeps_insertion_order() {
    let mut session = Session::new(Roster::seeded());
    session.add_friend("Dana", "https://i.pravatar.cc/48").unwrap();
    session.add_friend("Eve", "https://i.pravatar.cc/48").unwrap();

    let names: Vec<_> = session.roster().iter().map(Friend::name).collect();
    assert_eq!(names, ["Clark", "Sarah", "Anthony", "Dana", "Eve"]);
}
