//! # エコーハンドラ
//!
//! リクエストの Cookie / クエリパラメータの値をそのままボディに書き戻す。
//! 値が無い場合も空ボディの 200 を返し、エラーにはしない。

use axum::{
    extract::RawQuery,
    http::{HeaderMap, header},
};
use axum_extra::extract::cookie::Cookie;

/// エコー対象の Cookie 名
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// エコー対象のクエリパラメータ名
pub const USER_ID_PARAM: &str = "userID";

/// GET /api/getCookie
///
/// `Cookie` ヘッダーを出現順に走査し、最初に一致した Cookie の値を返す。
/// 値を囲む二重引用符は取り除く。
pub async fn get_cookie(headers: HeaderMap) -> String {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value_trimmed().to_string())
        .unwrap_or_default()
}

/// GET /api/getQuery
///
/// 不正なエンコーディングを含むクエリでも失敗させないため、
/// `Query` エクストラクタではなく生のクエリ文字列を 1 組ずつ解釈する。
/// デコードできない組（不正なパーセントエスケープ、`;` を含む組）は読み飛ばす。
/// 同名パラメータが複数ある場合は先頭の値を返す。
pub async fn get_query(RawQuery(query): RawQuery) -> String {
    query
        .as_deref()
        .and_then(|q| {
            q.split('&')
                .filter(|pair| is_decodable_pair(pair))
                .flat_map(|pair| url::form_urlencoded::parse(pair.as_bytes()))
                .find(|(key, _)| key == USER_ID_PARAM)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

/// `%` の後ろに 16 進数 2 桁が続かない組、`;` を含む組は解釈しない
fn is_decodable_pair(pair: &str) -> bool {
    !pair.contains(';')
        && pair.split('%').skip(1).all(|rest| {
            rest.as_bytes()
                .get(..2)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}
