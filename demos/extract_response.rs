//! Example: extracting every artifact from one finished response.
//!
//! Run with: `cargo run --example extract_response`

use response_extract::{ChatMessage, ConversationMode, Extractor, OutlineNode};

const RESPONSE: &str = r#"Here is a study pack on cell biology.

| Term | Definition |
|------|------------|
| Mitochondria | Produces ATP |
| Ribosome | Builds proteins |

```chart_json
{"type": "pie", "data": {"labels": ["Water", "Protein"], "datasets": [{"label": "Cell mass", "data": [70, 18]}]}}
```

Cell biology topics:
- Organelles
  - Nucleus
  - Mitochondria
- Processes
  - Mitosis
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let result = Extractor::default().extract(RESPONSE, ConversationMode::MindMap);

    println!("Intro: {:?}", result.intro_text);
    for card in result.flashcards.iter().flatten() {
        println!("Card: {} -> {}", card.term, card.definition);
    }
    if let Some(chart) = result.chart_spec()? {
        println!("Chart: {:?} with {} labels", chart.chart_type, chart.data.labels.len());
    }

    let mut message = ChatMessage::assistant(RESPONSE);
    message.attach(result);

    // Simulate the user editing the mind map.
    message.replace_outline(
        OutlineNode::new("Cell biology")
            .with_child(OutlineNode::new("Organelles"))
            .with_child(OutlineNode::new("Processes")),
    );
    println!("Context for next request:\n{}", message.context_text());

    Ok(())
}
