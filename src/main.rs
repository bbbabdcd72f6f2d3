use anyhow::Result;

fn main() -> Result<()> {
    ai_transcript_engine::cli::run()
}
