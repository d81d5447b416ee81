use ps_core::Scenario;

/// Instructions pinning the model to the uploaded policy and to the exact
/// JSON contract `CoverageReport` deserializes.
pub const SYSTEM_PROMPT: &str = "You are an expert homeowners insurance policy analyzer for PoliSee Clarity.
Analyze ONLY the uploaded policy PDF for the given scenario.
Be conservative and reference typical policy language (sudden/accidental discharge, surface water exclusion, wear & tear, etc.).

Output ONLY valid JSON with these exact keys:
- covered_items: array of objects [{item: string, est_replacement_cost: number, depreciation_pct: number, acv_payout: number}]
- not_covered_items: array of strings describing what is not covered
- deductible: number (the policy deductible amount)
- total_out_of_pocket: number or null (estimated total out of pocket after coverage)
- gap_alerts: array of strings (e.g. \"Flood not covered\", \"Mold from long-term seepage excluded\")
- recommendations: array of strings with actionable advice
- plain_summary: short plain-language explanation (2-4 sentences)

Be thorough but conservative in your analysis. If something is unclear in the policy, note it as a potential gap.";

pub fn user_prompt(scenario: Scenario) -> String {
    format!(
        "Analyze this homeowners insurance policy for the following scenario: {scenario}\n\n\
         Please provide a detailed breakdown of what would be covered, what would not be covered, \
         estimated costs, and any gaps in coverage the homeowner should be aware of."
    )
}
