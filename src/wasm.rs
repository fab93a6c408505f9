pub mod utils;

use crate::batch::EdgeQuery;
use crate::constructions::{BisectorShape, Constructions};
use crate::geometries::Point2;
use crate::wasm::utils::{parse_js_site, parse_js_sites, to_js_error};
use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_SITE: &'static str = r#"
export type PointSite = [number, number];
export type SegmentSite = [[number, number], [number, number]];
export type Site = PointSite | SegmentSite;
"#;

fn flatten(points: &[Point2]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &key.into(), value).map(|_| ())
}

fn shape_to_js(shape: &BisectorShape) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    match shape {
        BisectorShape::Line(l) => {
            set(&obj, "kind", &"line".into())?;
            set(&obj, "coefficients", &Float64Array::from(&[l.a, l.b, l.c][..]))?;
        }
        BisectorShape::Ray(r) => {
            set(&obj, "kind", &"ray".into())?;
            set(&obj, "source", &Float64Array::from(&r.source.to_array()[..]))?;
            set(&obj, "direction", &Float64Array::from(&[r.direction.dx, r.direction.dy][..]))?;
        }
        BisectorShape::Segment(s) => {
            set(&obj, "kind", &"segment".into())?;
            set(&obj, "source", &Float64Array::from(&s.source.to_array()[..]))?;
            set(&obj, "target", &Float64Array::from(&s.target.to_array()[..]))?;
        }
        BisectorShape::Parabola(p) => {
            let d = p.directrix();
            set(&obj, "kind", &"parabola".into())?;
            set(&obj, "focus", &Float64Array::from(&p.focus().to_array()[..]))?;
            set(&obj, "directrix", &Float64Array::from(&[d.a, d.b, d.c][..]))?;
            set(&obj, "source", &Float64Array::from(&p.source().to_array()[..]))?;
            set(&obj, "target", &Float64Array::from(&p.target().to_array()[..]))?;
        }
    }
    Ok(obj.into())
}

/// Segment Voronoi diagram constructions for JavaScript.
#[wasm_bindgen(js_name = SvdConstructions)]
pub struct SvdConstructions {
    inner: Constructions,
}

#[wasm_bindgen(js_class = SvdConstructions)]
impl SvdConstructions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SvdConstructions {
        SvdConstructions { inner: Constructions::new() }
    }

    /// Returns `[x, y]`.
    pub fn vertex(&self, s1: JsValue, s2: JsValue, s3: JsValue) -> Result<Vec<f64>, JsValue> {
        let v = self
            .inner
            .vertex(&parse_js_site(&s1)?, &parse_js_site(&s2)?, &parse_js_site(&s3)?)
            .map_err(to_js_error)?;
        Ok(v.to_array().to_vec())
    }

    /// Returns `[cx, cy, radius]`.
    pub fn circle(&self, s1: JsValue, s2: JsValue, s3: JsValue) -> Result<Vec<f64>, JsValue> {
        let c = self
            .inner
            .circle(&parse_js_site(&s1)?, &parse_js_site(&s2)?, &parse_js_site(&s3)?)
            .map_err(to_js_error)?;
        Ok(vec![c.center.x, c.center.y, c.radius()])
    }

    #[wasm_bindgen(js_name = bisectorLine)]
    pub fn bisector_line(&self, p: JsValue, q: JsValue) -> Result<JsValue, JsValue> {
        let l = self
            .inner
            .bisector_line(&parse_js_site(&p)?, &parse_js_site(&q)?)
            .map_err(to_js_error)?;
        shape_to_js(&BisectorShape::Line(l))
    }

    #[wasm_bindgen(js_name = bisectorRay)]
    pub fn bisector_ray(&self, p: JsValue, q: JsValue, r: JsValue) -> Result<JsValue, JsValue> {
        let ray = self
            .inner
            .bisector_ray(&parse_js_site(&p)?, &parse_js_site(&q)?, &parse_js_site(&r)?)
            .map_err(to_js_error)?;
        shape_to_js(&BisectorShape::Ray(ray))
    }

    #[wasm_bindgen(js_name = bisectorSegment)]
    pub fn bisector_segment(&self, p: JsValue, q: JsValue, r: JsValue, s: JsValue) -> Result<JsValue, JsValue> {
        let shape = self
            .inner
            .bisector_segment(&parse_js_site(&p)?, &parse_js_site(&q)?, &parse_js_site(&r)?, &parse_js_site(&s)?)
            .map_err(to_js_error)?;
        shape_to_js(&shape)
    }

    /// Flat polyline `[x0, y0, x1, y1, ...]` of the bisector segment, with
    /// parabolic arcs sampled at `count` points.
    #[wasm_bindgen(js_name = sampleBisectorSegment)]
    pub fn sample_bisector_segment(
        &self,
        p: JsValue,
        q: JsValue,
        r: JsValue,
        s: JsValue,
        count: usize,
    ) -> Result<Vec<f64>, JsValue> {
        let shape = self
            .inner
            .bisector_segment(&parse_js_site(&p)?, &parse_js_site(&q)?, &parse_js_site(&r)?, &parse_js_site(&s)?)
            .map_err(to_js_error)?;
        Ok(flatten(&shape.to_polyline(0.0, count)))
    }

    /// Samples many bisector segments in parallel.
    ///
    /// `quads` holds four site indices per edge. Each entry of the returned array is
    /// a flat polyline, or `null` when the edge could not be constructed.
    #[wasm_bindgen(js_name = sampleBisectorSegments)]
    pub fn sample_bisector_segments(&self, sites: Array, quads: &[u32], count: usize) -> Result<Array, JsValue> {
        let sites = parse_js_sites(&sites)?;
        let queries: Vec<EdgeQuery> = quads
            .chunks_exact(4)
            .map(|c| EdgeQuery::Segment(c[0] as usize, c[1] as usize, c[2] as usize, c[3] as usize))
            .collect();
        let polylines = self
            .inner
            .map_edges(&sites, &queries, |shape| shape.ok().map(|s| flatten(&s.to_polyline(0.0, count))));

        let out = Array::new_with_length(polylines.len() as u32);
        for (i, polyline) in polylines.iter().enumerate() {
            let value = match polyline {
                Some(points) => Float64Array::from(&points[..]).into(),
                None => JsValue::NULL,
            };
            out.set(i as u32, value);
        }
        Ok(out)
    }
}

impl Default for SvdConstructions {
    fn default() -> Self {
        Self::new()
    }
}
