//! The fixed endpoint table swept by the checker.

use serde_json::json;
use tdx_api_client::Endpoint;


/// Builds the ordered list of endpoints to exercise.
///
/// The table is trusted static configuration: paths carry their query
/// strings verbatim and entries are checked in declared order. The health
/// check is the one endpoint whose response schema is allowed to diverge
/// from the standard envelope.
#[must_use]
pub fn endpoint_table() -> Vec<Endpoint> {
    vec![
        Endpoint::get("quote", "/api/quote?code=000001"),
        Endpoint::get("kline_day", "/api/kline?code=000001&type=day"),
        Endpoint::get("minute", "/api/minute?code=000001&date=20241108"),
        Endpoint::get("trade", "/api/trade?code=000001&date=20241108"),
        Endpoint::get("search", "/api/search?keyword=000001"),
        Endpoint::get("stock_info", "/api/stock-info?code=000001"),
        Endpoint::get("codes_sz", "/api/codes?exchange=sz"),
        Endpoint::post(
            "batch_quote",
            "/api/batch-quote",
            json!({"codes": ["000001", "600519", "601318"]}),
        ),
        Endpoint::get(
            "kline_history",
            "/api/kline-history?code=000001&type=day&start_date=20241011&end_date=20241108",
        ),
        Endpoint::get("index_day", "/api/index?code=sh000001&type=day"),
        Endpoint::get("index_all_day", "/api/index/all?code=sh000001&type=day"),
        Endpoint::get("market_stats", "/api/market-stats"),
        Endpoint::get("market_count", "/api/market-count"),
        Endpoint::get("stock_codes", "/api/stock-codes"),
        Endpoint::get("etf_codes", "/api/etf-codes"),
        Endpoint::get("server_status", "/api/server-status"),
        Endpoint::get_raw("health", "/api/health"),
        Endpoint::get("etf_list", "/api/etf?exchange=sh&limit=10"),
        Endpoint::get(
            "trade_history",
            "/api/trade-history?code=000001&date=20241108&start=0&count=200",
        ),
        Endpoint::get(
            "trade_history_full",
            "/api/trade-history/full?code=000001&start_date=2024-10-01&end_date=2024-10-08&limit=500",
        ),
        Endpoint::get(
            "minute_trade_all",
            "/api/minute-trade-all?code=000001&date=20241108",
        ),
        Endpoint::get(
            "kline_all_tdx",
            "/api/kline-all/tdx?code=000001&type=day&limit=1000",
        ),
        Endpoint::get(
            "kline_all_ths",
            "/api/kline-all/ths?code=000001&type=day&limit=1000",
        ),
        Endpoint::get("workday", "/api/workday?date=2024-11-08&count=3"),
        Endpoint::get("workday_range", "/api/workday/range?start=2024-11-01&end=2024-11-08"),
        Endpoint::get(
            "income",
            "/api/income?code=000001&start_date=2024-11-01&days=5,10,20",
        ),
        Endpoint::get("tasks_list", "/api/tasks"),
    ]
}
