//! Plain-text engineering summary.

use std::io::{self, Write};

use studio_session::EngineSession;

/// Write a human-readable summary of `session`, one section per results group.
pub fn write_summary(writer: &mut dyn Write, session: &EngineSession) -> io::Result<()> {
    let bundle = session.results();
    let params = session.params();

    writeln!(writer, "ROCKET ENGINE ANALYSIS")?;
    writeln!(
        writer,
        "{} | {} | {} | {}",
        bundle.propellant.name, bundle.cycle.name, bundle.nozzle.name, bundle.structural.material
    )?;
    writeln!(
        writer,
        "Target {:.0} N at {:.1} bar, O/F {:.2}, area ratio {:.1}, burn {:.1} s, injector {}",
        params.thrust_n,
        params.chamber_pressure_bar,
        params.of_ratio,
        params.expansion_ratio,
        params.burn_time_s,
        params.injector
    )?;

    let perf = &bundle.performance;
    section(writer, "Performance")?;
    writeln!(writer, "  Theoretical thrust      {:>10.2} kN", perf.theoretical_thrust_kn)?;
    writeln!(writer, "  Experimental thrust     {:>10.2} kN", perf.experimental_thrust_kn)?;
    writeln!(writer, "  Theoretical Isp         {:>10.1} s", perf.theoretical_isp_s)?;
    writeln!(writer, "  Experimental Isp        {:>10.1} s", perf.experimental_isp_s)?;
    writeln!(writer, "  Mass flow               {:>10.3} kg/s", perf.mass_flow_kg_s)?;
    let c_star = perf.characteristic_velocity_m_s;
    writeln!(writer, "  Characteristic velocity {c_star:>10.0} m/s")?;
    writeln!(writer, "  Thrust coefficient      {:>10.3}", perf.thrust_coefficient)?;
    writeln!(writer, "  Specific heat ratio     {:>10.3}", perf.specific_heat_ratio)?;

    let thermal = &bundle.thermal;
    section(writer, "Thermal")?;
    let tc = thermal.combustion_temperature_k;
    writeln!(writer, "  Combustion temperature  {tc:>10.0} K")?;
    writeln!(writer, "  Erosion rate            {:>10.3} mm/s", thermal.erosion_rate_mm_s)?;

    let propulsion = &bundle.propulsion;
    section(writer, "Propulsion")?;
    writeln!(writer, "  Architecture            {}", propulsion.architecture)?;
    writeln!(writer, "  Family                  {}", propulsion.family)?;
    if let Some(rate) = bundle.propellant.burn_rate_mm_s {
        writeln!(writer, "  Burn rate               {rate:>10.2} mm/s")?;
    }
    if let Some(rate) = bundle.propellant.regression_rate_mm_s {
        writeln!(writer, "  Regression rate         {rate:>10.2} mm/s")?;
    }

    let structural = &bundle.structural;
    section(writer, "Structural")?;
    writeln!(writer, "  Throat diameter         {:>10.1} mm", structural.throat_diameter_mm)?;
    writeln!(writer, "  Chamber diameter        {:>10.1} mm", structural.chamber_diameter_mm)?;
    writeln!(writer, "  Exit diameter           {:>10.1} mm", structural.exit_diameter_mm)?;
    writeln!(writer, "  Safety factor (throat)  {:>10.2}", structural.safety_factor_throat)?;
    writeln!(writer, "  Safety factor (chamber) {:>10.2}", structural.safety_factor_chamber)?;

    let stability = &bundle.stability;
    section(writer, "Stability")?;
    writeln!(writer, "  Pressure stability      ±{:.1}%", stability.pressure_cv_percent)?;
    writeln!(writer, "  Thrust stability        ±{:.1}%", stability.thrust_cv_percent)?;
    writeln!(writer, "  Acoustic stability      {}", bundle.acoustic.stability_summary())?;
    for mode in &bundle.acoustic.modes {
        writeln!(
            writer,
            "    {:<3} {:>9.1} Hz  growth {:.3}  risk {:?}  ({})",
            mode.kind.label(),
            mode.frequency_hz,
            mode.growth_rate,
            mode.risk,
            mode.kind.description()
        )?;
    }
    for line in &bundle.acoustic.recommendations {
        writeln!(writer, "    - {line}")?;
    }

    let eff = &bundle.efficiencies;
    section(writer, "Efficiencies")?;
    writeln!(writer, "  Combustion              {:>9.1}%", eff.combustion_percent)?;
    writeln!(writer, "  Nozzle                  {:>9.1}%", eff.nozzle_percent)?;
    writeln!(
        writer,
        "  Overall                 {:>9.1}%  ({})",
        eff.overall_percent,
        eff.rating.label()
    )?;
    writeln!(writer, "  Total                   {:>9.1}%", eff.total_percent)?;

    let dev = &bundle.deviations;
    section(writer, "Deviations")?;
    writeln!(
        writer,
        "  Thrust {:+.2}%  Isp {:+.2}%  Mass flow {:+.2}%  Pressure {:+.2}%",
        dev.thrust, dev.isp, dev.mass_flow, dev.pressure
    )?;

    section(writer, "Explanations")?;
    for explanation in &bundle.explanations {
        writeln!(
            writer,
            "  {} {}: {}",
            explanation.kind, explanation.deviation, explanation.label
        )?;
        for reason in explanation.reasons {
            writeln!(writer, "    * {reason}")?;
        }
        for recommendation in explanation.recommendations {
            writeln!(writer, "    > {recommendation}")?;
        }
    }

    let assessment = &bundle.assessment;
    section(writer, "Assessment")?;
    writeln!(writer, "  Grade {} ({})", assessment.grade, assessment.verdict)?;
    writeln!(writer, "  {}", assessment.summary)?;
    writeln!(writer, "  Action: {}", assessment.action)?;

    writer.flush()
}

fn section(writer: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "-".repeat(title.len()))
}
