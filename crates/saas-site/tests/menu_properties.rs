use proptest::prelude::*;
use saas_site::menu::{MenuEvent, MenuState};

fn event() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![Just(MenuEvent::Toggle), Just(MenuEvent::SelectLink)]
}

proptest! {
    #[test]
    fn toggle_parity_decides_visibility(toggles in 0usize..64) {
        let state = (0..toggles).fold(MenuState::default(), |state, _| state.apply(MenuEvent::Toggle));
        prop_assert_eq!(state.is_open(), toggles % 2 == 1);
    }

    #[test]
    fn selecting_a_link_always_closes(history in proptest::collection::vec(event(), 0..32)) {
        let state = history.into_iter().fold(MenuState::default(), MenuState::apply);
        prop_assert_eq!(state.apply(MenuEvent::SelectLink), MenuState::Closed);
    }
}
