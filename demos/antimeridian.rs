use geobounds::{BoundingBoxCalculator, Domain, GeoRect, Pixel, Rect, Span};
use tracing_subscriber::EnvFilter;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let geographic = BoundingBoxCalculator::geographic();

    let islands = [
        GeoRect::new(177.0, -19.0, -178.0, -16.0),
        GeoRect::new(172.0, -44.0, 178.5, -34.0),
        GeoRect::new(-176.5, -44.5, -176.0, -43.5),
    ];

    if let Some(rect) = geographic.geo_rects_bbox(&islands)? {
        tracing::info!(?rect, "islands");
    }

    let points = geographic.points_bbox(&[170.0, 10.0, -170.0, -10.0, 179.5, 0.0])?;
    tracing::info!(?points, "points");

    let screen = BoundingBoxCalculator::<Pixel>::new(
        Domain::linear(Span::new(0.0, 1920.0)),
        Domain::linear(Span::new(0.0, 1080.0)),
    );

    let union = screen.union(&[
        Rect::xywh(10.0, 10.0, 100.0, 50.0),
        Rect::xywh(400.0, 300.0, 20.0, 20.0),
    ])?;
    tracing::info!(?union, "screen union");

    Ok(())
}
