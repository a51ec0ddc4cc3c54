//! Pedigree chart: parents point at their children.

use serde_json::{json, Value};
use simple_dag::*;

/// Mixin giving every vertex of the chart a `name()` accessor.
#[derive(Debug, Clone, Default)]
struct Person;

trait Named<'g> {
    fn name(&self) -> &'g str;
}

impl<'g> Named<'g> for Vertex<'g, Value, Person> {
    fn name(&self) -> &'g str {
        self.get("name").and_then(Value::as_str).unwrap_or("?")
    }
}

fn person(name: &str, born: u32) -> Payload {
    let mut payload = Payload::new();
    payload.insert("name".to_string(), json!(name));
    payload.insert("born".to_string(), json!(born));
    payload
}

fn main() -> DagResult<()> {
    env_logger::init();

    let mut chart = Dag::with_mixin(Person);
    let ada = chart.create_vertex(person("ada", 1921));
    let joe = chart.create_vertex(person("joe", 1948));
    let bob = chart.create_vertex(person("bob", 1972));
    let jane = chart.create_vertex(person("jane", 1975));
    let chris = chart.create_vertex(person("chris", 2001));

    chart.connect(EdgeSpec::new().from(ada).to(joe).property("relation", json!("mother of")))?;
    chart.connect(EdgeSpec::new().from(joe).to(bob).property("relation", json!("father of")))?;
    chart.connect(EdgeSpec::new().from(joe).to(jane).property("relation", json!("father of")))?;
    chart.add_edge(bob, jane)?;
    chart.add_edge(jane, chris)?;

    println!(
        "Chart has {} people and {} links",
        chart.vertex_count(),
        chart.edge_count()
    );

    // A descendant can never become an ancestor
    if let Err(err) = chart.add_edge(chris, ada) {
        println!("Refused chris -> ada: {}", err);
    }

    let order: Vec<&str> = chart
        .topological_sort()
        .into_iter()
        .filter_map(|id| chart.vertex(id))
        .map(|v| v.name())
        .collect();
    println!("Oldest generation first: {}", order.join(", "));

    let jane_v = chart.vertex(jane).ok_or(DagError::InvalidVertex(Role::Target))?;
    let mut ancestors: Vec<&str> = jane_v
        .ancestors()
        .into_iter()
        .filter_map(|id| chart.vertex(id))
        .map(|v| v.name())
        .collect();
    ancestors.sort_unstable();
    println!("Ancestors of jane: {}", ancestors.join(", "));

    let family = chart.subgraph(&[], &[joe])?;
    let members: Vec<&str> = family.vertices().map(|v| v.name()).collect();
    println!(
        "Joe's line: {} ({} links)",
        members.join(", "),
        family.edge_count()
    );

    Ok(())
}
