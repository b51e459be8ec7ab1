use transfers::identity::{normalized_name, split_name};
use transfers::{AppState, GroupBy, Transfer, TransportMode, WorkerKind};

fn transfer(name: &str, origin: &str, destination: &str, is_new: bool) -> Transfer {
    let (last_name, first_name) = split_name(name);
    Transfer {
        id: normalized_name(name),
        name: name.to_string(),
        last_name,
        first_name,
        kind: WorkerKind::Elder,
        companion: String::new(),
        origin_city: origin.to_string(),
        origin_zone: String::new(),
        origin_district: String::new(),
        origin_area: String::new(),
        destination_city: destination.to_string(),
        destination_zone: String::new(),
        destination_district: String::new(),
        destination_area: String::new(),
        transport: TransportMode::Bus,
        date: None,
        time: None,
        instructions: String::new(),
        leader: false,
        is_new,
    }
}

#[test]
fn regroup_twice_yields_identical_views() {
    let mut state = AppState::default();
    state.add_transfer(transfer("Silva, João", "Tete", "Beira", false));
    state.add_transfer(transfer("Costa, Ana", "Beira", "Tete", true));
    state.add_transfer(transfer("Alves, Rui", "Tete", "Beira", false));

    for by in [GroupBy::CityPair, GroupBy::Transport, GroupBy::Master] {
        let first = state.groups(by);
        let second = state.groups(by);
        assert_eq!(
            first.keys().collect::<Vec<_>>(),
            second.keys().collect::<Vec<_>>()
        );
        for (key, members) in &first {
            let ids: Vec<&str> = members.iter().map(|t| t.id.as_str()).collect();
            let again: Vec<&str> = second[key].iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, again);
        }
    }
}

#[test]
fn removing_the_last_member_drops_the_group_key() {
    let mut state = AppState::default();
    state.add_transfer(transfer("Silva, João", "Tete", "Beira", false));
    state.add_transfer(transfer("Costa, Ana", "Beira", "Tete", false));

    assert!(state.groups(GroupBy::CityPair).contains_key("Tete -> Beira"));
    assert!(state.remove_transfer("silva, joão"));

    let groups = state.groups(GroupBy::CityPair);
    assert!(!groups.contains_key("Tete -> Beira"));
    assert_eq!(groups.len(), 1);
}

#[test]
fn transport_edit_moves_the_transfer_on_the_next_regroup() {
    let mut state = AppState::default();
    state.add_transfer(transfer("Silva, João", "Tete", "Beira", false));

    assert!(state.groups(GroupBy::Transport).contains_key("Bus"));
    state.update_transfer("silva, joão", |t| t.transport = TransportMode::Plane);

    let groups = state.groups(GroupBy::Transport);
    assert!(groups.contains_key("Plane"));
    assert!(!groups.contains_key("Bus"));
}

#[test]
fn group_views_borrow_rather_than_copy() {
    let mut state = AppState::default();
    state.add_transfer(transfer("Silva, João", "Tete", "Beira", false));
    state.update_transfer("silva, joão", |t| {
        t.instructions = "front seat".to_string();
    });

    let groups = state.groups(GroupBy::CityPair);
    assert_eq!(groups["Tete -> Beira"][0].instructions, "front seat");
}

#[test]
fn manual_add_lands_in_its_city_pair_group() {
    let mut state = AppState::default();
    state.add_transfer(transfer("Silva, João", "Tete", "Beira", false));
    state.add_transfer(transfer("Manual, Novo", "Caia", "Marromeu", true));

    let groups = state.groups(GroupBy::CityPair);
    assert!(groups.contains_key("Caia -> Marromeu"));
    assert_eq!(groups.len(), 2);
}
