/// Quickstart example - the simplest possible usage
use serde_json::json;
use tabulate::{wrap_document, Table, TableRenderer};

fn main() -> anyhow::Result<()> {
    println!("=== Tabulate Quick Start ===\n");

    // Step 1: Your tables
    let tables = vec![
        Table::new(
            "users",
            vec![
                json!({
                    "id": 1,
                    "username": "alice",
                    "posts": [{"title": "Hello"}, {"title": "Again"}]
                }),
                json!({"id": 2, "username": "bob", "email": "bob@example.com"}),
            ],
        ),
        Table::new("audit_log", vec![]),
    ];

    // Step 2: Look at the columns each table will get
    let renderer = TableRenderer::default();
    for table in &tables {
        let data = renderer.tabulate(table);
        println!("{}: {} rows", table.name, data.rows.len());
        for path in data.columns.iter() {
            println!("  • {}", path);
        }
    }

    // Step 3: Render and write the page
    let html = wrap_document(&renderer.render_tables(&tables));
    std::fs::write("tables.html", html)?;

    println!("\n✓ Done! Open tables.html in a browser.");

    Ok(())
}
