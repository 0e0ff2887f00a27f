//! Sequential collection-and-report orchestration.
//!
//! One category at a time, in a fixed order: create the sheet, collect the
//! record, write the category JSON, rotate the console log, render the
//! report block. The workbook is saved once at the end of the pass.

use crate::adb::DeviceChannel;
use crate::collect::cpu::CpuCollector;
use crate::collect::display::DisplayCollector;
use crate::collect::hardware::HardwareCollector;
use crate::collect::software::SoftwareCollector;
use crate::collect::{self, SpecCollector};
use crate::report;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use specgrep_common::fsutil;
use specgrep_common::workbook::Workbook;
use std::path::PathBuf;
use tracing::info;

/// The shared console log the orchestrator rotates per category.
pub const CONSOLE_LOG: &str = "console_output.log";

/// Per-run folder name under the log directory.
pub fn run_name(now: DateTime<Local>) -> String {
    format!("specgrep_{}", now.format("%Y_%m_%d_%H_%M_%S"))
}

pub struct Pipeline<'a> {
    device: &'a dyn DeviceChannel,
    collectors: Vec<Box<dyn SpecCollector>>,
    serial: String,
    results_dir: PathBuf,
    workbook: Workbook,
}

impl<'a> Pipeline<'a> {
    /// Fixed category order. Every collector's description tables are
    /// validated here so an incomplete table fails the run up front.
    pub fn new(
        device: &'a dyn DeviceChannel,
        serial: impl Into<String>,
        results_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let collectors: Vec<Box<dyn SpecCollector>> = vec![
            Box::new(HardwareCollector),
            Box::new(SoftwareCollector),
            Box::new(CpuCollector),
            Box::new(DisplayCollector),
        ];
        for collector in &collectors {
            collect::validate_descriptions(collector.as_ref())?;
        }
        Ok(Self {
            device,
            collectors,
            serial: serial.into(),
            results_dir: results_dir.into(),
            workbook: Workbook::new(),
        })
    }

    /// Run every category strictly in sequence, then save the workbook.
    /// Returns the results directory.
    pub fn run(mut self) -> Result<PathBuf> {
        for collector in &self.collectors {
            let category = collector.category();
            info!("collecting {}", category);
            self.workbook.create_sheet(category)?;

            let record = collector.collect(self.device);
            info!(
                "{}: {} of {} fields populated",
                category,
                record.iter().filter(|(_, v)| v.is_some()).count(),
                record.len()
            );

            let json_path = self.results_dir.join(format!("{category}.json"));
            fsutil::write_json(&json_path, &record)
                .with_context(|| format!("writing {}", json_path.display()))?;

            fsutil::rotate_log(
                &self.results_dir.join(CONSOLE_LOG),
                &self.results_dir.join(format!("console_output_{category}.log")),
            )?;

            report::render(
                &mut self.workbook,
                category,
                &record,
                collector.descriptions(),
                collector.value_descriptions(),
            )?;
        }

        let book_path = self
            .results_dir
            .join(format!("{}_device_specs.workbook.json", self.serial));
        self.workbook.save(&book_path)?;
        info!("workbook saved to {}", book_path.display());

        Ok(self.results_dir)
    }
}
