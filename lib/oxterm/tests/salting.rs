//! Salting tests
//!
//! Checks that blank nodes coming from distinct stores or distinct graphs never collide
//! and that converting terms back and forth keeps their identity.

use oxterm::{
    BlankNode, DatasetAdapter, Literal, LocalStatement, LocalTerm, NamedNode, Quad, Salt, Term,
    TermAdapter, Triple,
};
use rand::random;
use std::collections::HashSet;
use std::thread;

fn statement(subject: &str) -> LocalStatement {
    LocalStatement::new(
        LocalTerm::blank_node(subject),
        LocalTerm::iri("http://ex/p"),
        LocalTerm::blank_node("o"),
    )
}

#[test]
fn test_distinct_salts_do_not_collide() {
    for _ in 0..100 {
        let a = TermAdapter::with_salt(Salt::from_u128(random()));
        let b = TermAdapter::with_salt(Salt::from_u128(random()));
        let from_a = a.create_blank_node_named("b1");
        let from_b = b.create_blank_node_named("b1");
        assert_ne!(from_a.unique_reference(), from_b.unique_reference());
        assert_eq!(
            from_a.unique_reference(),
            a.create_blank_node_named("b1").unique_reference()
        );
    }
}

#[test]
fn test_deterministic_salt() {
    let adapter = TermAdapter::with_salt("0123456789abcdef0123456789abcdef".parse().unwrap());
    assert_eq!(
        adapter
            .to_term(&LocalTerm::blank_node("b1"))
            .unwrap()
            .ntriples_string(),
        "_:s0123456789abcdef0123456789abcdef_b1"
    );
    assert_eq!(adapter.salt().to_string(), "0123456789abcdef0123456789abcdef");
}

#[test]
fn test_salted_references_are_injective() {
    let mut seen = HashSet::new();
    for salt in [0, 1, 0x10, u128::MAX] {
        let salt = Salt::from_u128(salt);
        for id in ["", "a", "_a", "0_a", "b1"] {
            assert!(
                seen.insert(salt.blank_node(id)),
                "{salt} and {id} gave an already seen blank node"
            );
        }
    }
}

#[test]
fn test_round_trip() {
    let adapter = TermAdapter::new();
    let local = statement("b0").in_context(LocalTerm::iri("http://ex/g"));
    let quad = adapter.to_quad(&local).unwrap();
    quad.validate().unwrap();
    assert_eq!(adapter.to_local_quad(&quad).unwrap(), local);

    let triple = adapter.to_triple(&local).unwrap();
    assert_eq!(
        adapter.to_local_statement(&triple).unwrap(),
        statement("b0")
    );
}

#[test]
fn test_invalid_store_statement_is_reported_on_read() {
    let adapter = TermAdapter::new();
    let triple = adapter
        .to_triple(&LocalStatement::new(
            LocalTerm::simple_literal("s"),
            LocalTerm::iri("http://ex/p"),
            LocalTerm::simple_literal("o"),
        ))
        .unwrap();
    triple.subject().unwrap_err();
    assert_eq!(triple.object().unwrap().literal().unwrap().lexical_form(), "o");
    adapter.to_local_statement(&triple).unwrap_err();
}

#[test]
fn test_foreign_blank_nodes_are_stable() {
    let source = TermAdapter::new();
    let target = TermAdapter::new();
    let triple = source.to_triple(&statement("b0")).unwrap();

    let exported = target.to_local_statement(&triple).unwrap();
    let LocalTerm::BlankNode(id) = &exported.subject else {
        panic!("the subject should stay a blank node")
    };
    assert_ne!(id, "b0");
    assert_eq!(target.to_local_statement(&triple).unwrap(), exported);
    assert_eq!(target.to_triple(&exported).unwrap(), triple);

    let fresh = Triple::new(
        BlankNode::default(),
        NamedNode::new("http://ex/p").unwrap(),
        Literal::from(1),
    );
    let exported = target.to_local_statement(&fresh).unwrap();
    assert_eq!(target.to_triple(&exported).unwrap(), fresh);
}

#[test]
fn test_graphs_have_distinct_scopes() {
    let adapter = DatasetAdapter::with_salt(Salt::random());
    let in_g1 = adapter
        .to_quad(&statement("b0").in_context(LocalTerm::iri("http://ex/g1")))
        .unwrap();
    let in_g2 = adapter
        .to_quad(&statement("b0").in_context(LocalTerm::iri("http://ex/g2")))
        .unwrap();
    let in_default = adapter.to_quad(&statement("b0")).unwrap();
    assert_ne!(in_g1.subject().unwrap(), in_g2.subject().unwrap());
    assert_ne!(in_g1.subject().unwrap(), in_default.subject().unwrap());

    let again = adapter
        .to_quad(&statement("b0").in_context(LocalTerm::iri("http://ex/g1")))
        .unwrap();
    assert_eq!(in_g1, again);
}

#[test]
fn test_graph_names_use_the_master_salt() {
    let adapter = DatasetAdapter::with_salt(Salt::random());
    let quad = adapter
        .to_quad(&statement("b0").in_context(LocalTerm::blank_node("g")))
        .unwrap();
    let default_graph = adapter
        .to_quad(&LocalStatement::new(
            LocalTerm::blank_node("g"),
            LocalTerm::iri("http://ex/p"),
            LocalTerm::iri("http://ex/o"),
        ))
        .unwrap();
    assert_eq!(
        quad.graph_name().unwrap(),
        Some(default_graph.subject().unwrap())
    );
    assert_eq!(
        adapter.to_local_statement(&quad).unwrap(),
        statement("b0").in_context(LocalTerm::blank_node("g"))
    );
}

#[test]
fn test_dataset_round_trip_of_foreign_quads() {
    let adapter = DatasetAdapter::new();
    let g = NamedNode::new("http://ex/g").unwrap();
    let quad = Quad::new(
        BlankNode::default(),
        NamedNode::new("http://ex/p").unwrap(),
        BlankNode::default(),
        g,
    );
    let local = adapter.to_local_statement(&quad).unwrap();
    assert_eq!(adapter.to_quad(&local).unwrap(), quad);
}

#[test]
fn test_adapters_are_shared_across_threads() {
    let adapter = TermAdapter::new();
    let foreign = Term::from(BlankNode::default());
    let ids = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| adapter.to_local_term(&foreign).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<HashSet<_>>()
    });
    assert_eq!(ids.len(), 1);
}
