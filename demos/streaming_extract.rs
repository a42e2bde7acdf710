//! Example: extracting from a streamed response once it completes.
//!
//! Run with: `cargo run --example streaming_extract`

use futures::stream;
use response_extract::{extract_stream, ConversationMode, Extractor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stand-in for a token stream from the model transport.
    let tokens = [
        "I've added it to your calendar.\n",
        "```schedule_json\n{\"title\": \"Standup\", ",
        "\"startTime\": \"2024-03-04T09:00:00Z\", \"endTime\": \"2024-03-04T09:15:00Z\", ",
        "\"details\": \"Daily sync\", \"location\": \"Room 2\"}\n```",
    ];
    let chunks = stream::iter(tokens.map(|t| Ok::<_, std::io::Error>(t.to_string())));

    let done = extract_stream(Extractor::default(), ConversationMode::Schedule, chunks).await?;

    if let Some(event) = done.extraction.schedule_event()? {
        println!("{} from {} to {}", event.title, event.start_time, event.end_time);
    }
    let message = done.into_message();
    println!("Attached: {:?}", message.extraction().map(|e| e.kinds()));

    Ok(())
}
