#[cfg(test)]
mod tests {
    use roas_engine::config::ScenarioFile;
    use roas_engine::digest::summarize_mix;
    use roas_engine::narrative::NarrativeRequest;
    use roas_engine::*;

    // ========== Channel Calculator ==========

    #[test]
    fn test_cpc_zero_budget_never_divides() {
        let result = compute(&ChannelInput::cpc("Google Ads", 0.0, 5.0, 2.0, 500.0));
        assert_eq!(result.clicks, 0.0);
        assert_eq!(result.roas, 0.0);
        assert!(result.revenue.is_finite());
    }

    #[test]
    fn test_seo_reference_scenario() {
        let result = compute(&ChannelInput::seo("SEO", 0.0, 10_000.0, 5.0, 2.0, 500.0));
        assert!((result.clicks - 500.0).abs() < 1e-9, "clicks: {}", result.clicks);
        assert!((result.conversions - 10.0).abs() < 1e-9);
        assert!((result.revenue - 5000.0).abs() < 1e-9);
        assert_eq!(result.roas, 0.0);
    }

    #[test]
    fn test_cpc_channel_ignores_other_kinds_fields() {
        let json = serde_json::json!({
            "name": "Paid",
            "kind": "cpc",
            "budget": 5000.0,
            "cpc": 5.0,
            "search_volume": 99999.0,
            "organic_ctr": 50.0,
            "recipients": 12345.0,
            "conversion_rate": 2.0,
            "average_order_value": 500.0
        });
        let from_json: ChannelInput = serde_json::from_value(json).expect("json channel parses");

        let toml = r#"
[[channels]]
name = "Paid"
kind = "cpc"
budget = 5000
cpc = 5
search_volume = 99999
organic_ctr = 50
recipients = 12345
conversion_rate = 2
average_order_value = 500
"#;
        let file = ScenarioFile::from_toml_str(toml).expect("toml channel parses");
        let from_toml = &file.channels[0];

        for channel in [&from_json, from_toml] {
            assert_eq!(channel.traffic, ChannelTraffic::Cpc { cpc: 5.0 });
            let result = compute(channel);
            assert!((result.clicks - 5000.0 / 5.0).abs() < 1e-9, "clicks: {}", result.clicks);
            assert!((result.revenue - 10_000.0).abs() < 1e-9);
        }
    }

    // ========== Multi-Channel Aggregation ==========

    #[test]
    fn test_default_mix_report() {
        let report = compute_mix(&ScenarioFile::default_mix());
        assert_eq!(report.rows.len(), 5);

        let share_sum: f64 = report.rows.iter().map(|r| r.budget_share).sum();
        assert!((share_sum - 100.0).abs() < 1e-9, "shares sum to {}", share_sum);

        let google = report.get("Google Ads").expect("Google Ads row");
        assert!((google.roas - 2.0).abs() < 1e-9);
        let email = report.get("E-mail").expect("E-mail row");
        assert!((email.clicks - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_mix_with_zero_total_budget() {
        let channels = vec![
            ChannelInput::seo("SEO", 0.0, 10_000.0, 5.0, 2.0, 500.0),
            ChannelInput::email("E-mail", 0.0, 5000.0, 20.0, 5.0, 2.0, 500.0),
        ];
        let report = compute_mix(&channels);
        assert!(report.rows.iter().all(|r| r.budget_share == 0.0));
        assert!(report.rows.iter().all(|r| r.result.roas == 0.0));
        assert_eq!(report.totals.roas, 0.0);
        assert!((report.totals.revenue - 5500.0).abs() < 1e-9);
    }

    #[test]
    fn test_mix_from_scenario_file() {
        let toml = r#"
[[channels]]
name = "Search"
kind = "cpc"
budget = 2000
cpc = 4
conversion_rate = 150
average_order_value = 100

[[channels]]
name = "Organic"
kind = "seo"
search_volume = 1000
organic_ctr = 10
conversion_rate = 5
average_order_value = 100
"#;
        let file = ScenarioFile::from_toml_str(toml).expect("scenario parses").validated();
        let report = compute_mix(&file.channels);
        let names: Vec<&str> = report.names().collect();
        assert_eq!(names, ["Search", "Organic"]);
        // conversion rate 150% is clamped to 100%: 500 clicks -> 500 conversions
        let search = report.get("Search").expect("Search row");
        assert!((search.conversions - 500.0).abs() < 1e-9);
        assert!((search.roas - 25.0).abs() < 1e-9);
    }

    // ========== ROAS / POAS Business Model ==========

    #[test]
    fn test_roas_reference_scenario() {
        let m = roas_metrics(&RoasInputs { gross_margin: 35.0, ad_spend: 10_000.0, roas_target: 2.0 });
        assert!((m.break_even_roas - 2.857142857).abs() < 1e-6);
        assert!((m.total_revenue - 20_000.0).abs() < 1e-9);
        assert!((m.monthly_profit + 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_poas_reference_scenario() {
        let m = poas_metrics(&PoasInputs {
            ad_spend: 10_000.0,
            product_cost: 100.0,
            variable_cost: 50.0,
            sales_count: 100,
            sale_price: 200.0,
        });
        assert_eq!(m.total_revenue, 20_000.0);
        assert_eq!(m.total_costs, 25_000.0);
        assert_eq!(m.total_profit, -5000.0);
        assert_eq!(m.poas, -0.5);
    }

    #[test]
    fn test_zero_ad_spend_is_guarded_everywhere() {
        let poas = poas_metrics(&PoasInputs { ad_spend: 0.0, ..PoasInputs::default() });
        assert_eq!(poas.poas, 0.0);

        let curve = poas_curve(&PoasInputs { ad_spend: 0.0, ..PoasInputs::default() });
        assert!(curve.values().all(|v| v == 0.0));

        let roas = roas_metrics(&RoasInputs { ad_spend: 0.0, ..RoasInputs::default() });
        assert_eq!(roas.total_revenue, 0.0);
        assert_eq!(roas.monthly_profit, 0.0);
    }

    // ========== Sweeps ==========

    #[test]
    fn test_profit_curve_is_plot_ready() {
        let curve = profit_curve(&RoasInputs::default());
        let inputs: Vec<f64> = curve.inputs().collect();
        assert_eq!(inputs, (1..=20).map(f64::from).collect::<Vec<_>>());
        assert_eq!(curve.reference_line, 0.0);
    }

    #[test]
    fn test_poas_curve_floor_of_four_points() {
        let curve = poas_curve(&PoasInputs { sales_count: 1, ..PoasInputs::default() });
        let inputs: Vec<f64> = curve.inputs().collect();
        assert_eq!(inputs, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(curve.reference_line, 1.0);
    }

    // ========== Presentation Seams ==========

    #[test]
    fn test_mix_digest_feeds_narrative_prompt() {
        let report = compute_mix(&ScenarioFile::default_mix());
        let summary = summarize_mix(&report);
        let request = NarrativeRequest::from_summary(&summary);
        let prompt = request.prompt().expect("user prompt");
        assert!(prompt.starts_with("Marketing Mix analysis\n\nData:\nGoogle Ads: Budget 5,000.00 kr., ROAS 2.00"));
        assert!(prompt.ends_with("Give a short analysis and suggestions for improvement."));
    }

    #[test]
    fn test_session_round_trip_through_pages() {
        use roas_engine::session::{NavEvent, Page};

        let mut session = Session::default();
        assert_eq!(session.navigate(NavEvent::OpenMix).page, Page::Mix);
        let view = session.mix_view();
        assert_eq!(view.report.rows.len(), 5);
        assert_eq!(session.navigate(NavEvent::Back).page, Page::Home);
    }

    #[test]
    fn test_report_serializes_with_kind_tags() {
        let report = compute_mix(&[ChannelInput::email("E-mail", 0.0, 5000.0, 20.0, 5.0, 2.0, 500.0)]);
        let json = serde_json::to_value(&report).expect("serializes");
        assert_eq!(json["rows"][0]["kind"], "email");
        assert_eq!(json["rows"][0]["name"], "E-mail");

        let input_json = serde_json::to_value(ChannelInput::cpc("Ads", 1.0, 2.0, 3.0, 4.0)).expect("serializes");
        assert_eq!(input_json["kind"], "cpc");
        assert_eq!(input_json["cpc"], 2.0);
    }
}
