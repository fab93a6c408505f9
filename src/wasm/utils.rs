use crate::site::Site;
use wasm_bindgen::prelude::*;
use js_sys::Array;

pub fn parse_js_point(val: &JsValue) -> Option<[f64; 2]> {
    let arr = val.dyn_ref::<Array>()?;
    if arr.length() < 2 {
        return None;
    }
    Some([arr.get(0).as_f64()?, arr.get(1).as_f64()?])
}

/// Reads a site: `[x, y]` is a point, `[[x, y], [x, y]]` a segment.
pub fn parse_js_site(val: &JsValue) -> Result<Site, JsValue> {
    let arr = val
        .dyn_ref::<Array>()
        .ok_or_else(|| JsValue::from_str("site must be an array"))?;
    if Array::is_array(&arr.get(0)) {
        let source = parse_js_point(&arr.get(0)).ok_or_else(|| JsValue::from_str("invalid segment source"))?;
        let target = parse_js_point(&arr.get(1)).ok_or_else(|| JsValue::from_str("invalid segment target"))?;
        Site::segment(source, target).map_err(to_js_error)
    } else {
        let [x, y] = parse_js_point(val).ok_or_else(|| JsValue::from_str("invalid point site"))?;
        Ok(Site::point(x, y))
    }
}

pub fn parse_js_sites(val: &Array) -> Result<Vec<Site>, JsValue> {
    val.iter().map(|s| parse_js_site(&s)).collect()
}

pub fn to_js_error(err: crate::ConstructionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
