//! Component mapping and confidence merging.
//!
//! Writes each record's resolved component and folds the resolution
//! into its confidence. Promotion only: a low record whose file
//! resolved becomes medium. Confidence already at medium or high is
//! never altered, and failed resolution never lowers anything.

use crate::rte::RteCallRecord;
use crate::symbols::{Confidence, FunctionRecord, VariableRecord};
use super::resolver::ComponentResolver;

/// Map every record to its file's component and append the bookkeeping
/// issues: how many symbols stayed unmapped, and how many records sit
/// below high confidence.
pub fn apply_component_mapping(
    resolver: &ComponentResolver,
    functions: &mut [FunctionRecord],
    variables: &mut [VariableRecord],
    calls: &mut [RteCallRecord],
    issues: &mut Vec<String>,
) {
    for record in functions.iter_mut() {
        let resolution = resolver.resolve(&record.file);
        merge_into(
            &mut record.swc,
            &mut record.confidence,
            &mut record.evidence,
            resolution.swc,
            &resolution.evidence,
        );
    }
    for record in variables.iter_mut() {
        let resolution = resolver.resolve(&record.file);
        merge_into(
            &mut record.swc,
            &mut record.confidence,
            &mut record.evidence,
            resolution.swc,
            &resolution.evidence,
        );
    }
    for record in calls.iter_mut() {
        let resolution = resolver.resolve(&record.file);
        merge_into(
            &mut record.swc,
            &mut record.confidence,
            &mut record.evidence,
            resolution.swc,
            &resolution.evidence,
        );
    }

    let unmapped = functions.iter().filter(|f| f.swc.is_empty()).count()
        + variables.iter().filter(|v| v.swc.is_empty()).count();
    if unmapped > 0 {
        issues.push(format!(
            "{} symbols could not be deterministically mapped to an SWC",
            unmapped
        ));
    }

    let below_high = functions
        .iter()
        .filter(|f| f.confidence != Confidence::High)
        .count()
        + variables
            .iter()
            .filter(|v| v.confidence != Confidence::High)
            .count()
        + calls
            .iter()
            .filter(|c| c.confidence != Confidence::High)
            .count();
    if below_high > 0 {
        issues.push(format!(
            "{} records are below high confidence; review recommended",
            below_high
        ));
    }
}

fn merge_into(
    swc: &mut String,
    confidence: &mut Confidence,
    evidence: &mut String,
    resolved_swc: String,
    resolution_evidence: &str,
) {
    let resolved = !resolved_swc.is_empty();
    *swc = resolved_swc;

    if *confidence == Confidence::Low && resolved {
        *confidence = Confidence::Medium;
    }

    if !evidence.is_empty() {
        evidence.push_str(" | ");
    }
    evidence.push_str(resolution_evidence);
}
