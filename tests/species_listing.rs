mod common;

use pokeinfo::models::{Generation, GenerationList, ResourceId};
use pokeinfo::species::{generation_entries, species_entries};

fn generation_1() -> Generation {
    serde_json::from_str(common::GENERATION_1).unwrap()
}

#[test]
fn species_are_alphabetical_regardless_of_upstream_order() {
    let names: Vec<String> = species_entries(&generation_1())
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        ["abra", "bulbasaur", "charmander", "mew", "missingno", "pikachu"]
    );

    let mut reversed = generation_1();
    reversed.pokemon_species.reverse();
    let again: Vec<String> = species_entries(&reversed)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, again);
}

#[test]
fn species_carry_ids_and_sprites() {
    let rows = species_entries(&generation_1());
    let pikachu = rows.iter().find(|s| s.name == "pikachu").unwrap();
    assert_eq!(pikachu.id, ResourceId::Number(25));
    assert_eq!(
        pikachu.sprite,
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
    );
}

#[test]
fn species_without_id_gets_empty_sprite_and_name_id() {
    let rows = species_entries(&generation_1());
    let odd = rows.iter().find(|s| s.name == "missingno").unwrap();
    assert_eq!(odd.sprite, "");
    assert_eq!(odd.id, ResourceId::Name("missingno".into()));
}

#[test]
fn generations_sorted_by_id_with_nameless_ids_last() {
    let list: GenerationList = serde_json::from_str(common::GENERATIONS).unwrap();
    let rows = generation_entries(&list);
    let ids: Vec<ResourceId> = rows.iter().map(|g| g.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            ResourceId::Number(1),
            ResourceId::Number(2),
            ResourceId::Number(3),
            ResourceId::Name("generation-x".into()),
        ]
    );
    assert_eq!(rows[0].name, "generation-i");
    assert_eq!(rows[0].url, "https://pokeapi.co/api/v2/generation/1/");
}

#[test]
fn entry_ids_serialize_as_number_or_string() {
    let list: GenerationList = serde_json::from_str(common::GENERATIONS).unwrap();
    let v = serde_json::to_value(generation_entries(&list)).unwrap();
    assert_eq!(v[0]["id"], 1);
    assert_eq!(v[3]["id"], "generation-x");
}

#[test]
fn empty_generation_yields_no_rows() {
    assert!(species_entries(&Generation::default()).is_empty());
    assert!(generation_entries(&GenerationList::default()).is_empty());
}
