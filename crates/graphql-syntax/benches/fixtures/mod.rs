pub const KITCHEN_SINK_QUERY: &str = include_str!("kitchen_sink_query.graphql");
pub const KITCHEN_SINK_SCHEMA: &str = include_str!("kitchen_sink_schema.graphql");

/// Synthesizes a wide, flat schema for throughput measurement: `count`
/// object types of eight fields each.
pub fn synthetic_schema(count: usize) -> String {
    let mut schema = String::from("schema { query: Type0 }\n");
    for i in 0..count {
        schema.push_str(&format!("\"Type number {i}\"\ntype Type{i} {{\n"));
        for j in 0..8 {
            schema.push_str(&format!("  field{j}(arg: Int = {j}): [String!]\n"));
        }
        schema.push_str("}\n");
    }
    schema
}

/// Synthesizes a deeply nested query for recursion-heavy parsing.
pub fn nested_query(depth: usize) -> String {
    let mut query = String::from("{ ");
    for _ in 0..depth {
        query.push_str("node(id: [1, 2]) { ");
    }
    query.push_str("leaf");
    for _ in 0..depth {
        query.push_str(" }");
    }
    query.push_str(" }");
    query
}
