//! Process command - extract fields from a single PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use gstx_core::models::config::GstxConfig;
use gstx_core::models::record::InvoiceRecord;
use gstx_core::pipeline::ExtractionPipeline;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip OCR and use only the embedded text layer
    #[arg(long)]
    text_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let mut config = if let Some(path) = config_path {
        GstxConfig::from_file(std::path::Path::new(path))?
    } else {
        GstxConfig::default()
    };

    if args.text_only {
        config.ocr.enabled = false;
    }

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);
    let data = fs::read(&args.input)?;

    let label = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    pb.set_message("Extracting fields...");
    pb.set_position(40);

    let pipeline = ExtractionPipeline::new(config);
    let record = pipeline.extract(&data, &label)?;

    pb.set_position(100);
    pb.finish_with_message("Done");

    // Format output
    let output = format_record(&record, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

pub fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    write_csv_header(&mut wtr)?;
    write_csv_row(&mut wtr, record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn write_csv_header<W: std::io::Write>(wtr: &mut csv::Writer<W>) -> anyhow::Result<()> {
    wtr.write_record([
        "Invoice_Number",
        "Seller_GST",
        "Buyer_GST",
        "Seller_State",
        "Seller_State_Code",
        "Buyer_State",
        "Buyer_State_Code",
        "Taxable_Value",
        "IGST",
        "CGST",
        "SGST",
        "Total_Amount",
        "FileName",
    ])?;
    Ok(())
}

pub fn write_csv_row<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    record: &InvoiceRecord,
) -> anyhow::Result<()> {
    wtr.write_record([
        record.invoice_number.as_str(),
        record.seller_gst.as_str(),
        record.buyer_gst.as_str(),
        record.seller_state.as_str(),
        record.seller_state_code.as_str(),
        record.buyer_state.as_str(),
        record.buyer_state_code.as_str(),
        &format!("{:.2}", record.taxable_value),
        &format!("{:.2}", record.igst),
        &format!("{:.2}", record.cgst),
        &format!("{:.2}", record.sgst),
        &format!("{:.2}", record.total_amount),
        record.file_name.as_str(),
    ])?;
    Ok(())
}

pub fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.invoice_number));
    output.push('\n');

    output.push_str("Seller:\n");
    output.push_str(&format!("  GSTIN: {}\n", record.seller_gst));
    if !record.seller_state.is_empty() {
        output.push_str(&format!(
            "  State: {} ({})\n",
            record.seller_state, record.seller_state_code
        ));
    }
    output.push('\n');

    output.push_str("Buyer:\n");
    output.push_str(&format!("  GSTIN: {}\n", record.buyer_gst));
    if !record.buyer_state.is_empty() {
        output.push_str(&format!(
            "  State: {} ({})\n",
            record.buyer_state, record.buyer_state_code
        ));
    }
    output.push('\n');

    output.push_str("Amounts:\n");
    output.push_str(&format!("  Taxable: {:.2}\n", record.taxable_value));
    output.push_str(&format!("  IGST:    {:.2}\n", record.igst));
    output.push_str(&format!("  CGST:    {:.2}\n", record.cgst));
    output.push_str(&format!("  SGST:    {:.2}\n", record.sgst));
    output.push_str(&format!("  Total:   {:.2}\n", record.total_amount));

    output
}
