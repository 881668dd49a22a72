use image::Rgba;

use super::*;

fn img(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255]))
}

#[test]
fn add_preserves_insertion_order() {
    let a = Arc::new(img(1, 1));
    let b = Arc::new(img(2, 2));
    let row = Row::new().add(Arc::clone(&a)).add(Arc::clone(&b));
    assert_eq!(row.len(), 2);
    assert!(Arc::ptr_eq(row.children()[0].image().unwrap(), &a));
    assert!(Arc::ptr_eq(row.children()[1].image().unwrap(), &b));
}

#[test]
fn push_chains_in_place() {
    let mut col = Column::new();
    col.push(img(1, 1)).push(Row::new().add(img(1, 1)));
    assert_eq!(col.len(), 2);
    assert!(!col.children()[0].is_composite());
    assert!(col.children()[1].is_composite());
}

#[test]
fn composites_start_unrendered() {
    let row = Row::new().add(img(1, 1));
    assert!(row.cached_image().is_none());
    let cell = Cell::from(row);
    assert!(cell.image().is_none());
    assert_eq!(cell.axis(), Some(Axis::Horizontal));
}

#[test]
fn leaf_image_is_always_present() {
    let cell = Cell::leaf(img(3, 4));
    assert_eq!(cell.image().unwrap().dimensions(), (3, 4));
    assert_eq!(cell.axis(), None);
    assert!(cell.stack().is_none());
}

#[test]
fn store_is_write_once() {
    let col = Column::new().add(img(1, 1));
    let first = col.stack().store(Arc::new(img(5, 5)));
    let second = col.stack().store(Arc::new(img(9, 9)));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(col.cached_image().unwrap().dimensions(), (5, 5));
}

#[test]
fn push_drops_stale_cached_image() {
    let mut row = Row::new().add(img(1, 1));
    row.stack().store(Arc::new(img(1, 1)));
    row.push(img(2, 2));
    assert!(row.cached_image().is_none());
    assert_eq!(row.len(), 2);
}

#[test]
fn reset_cache_clears_whole_subtree() {
    let inner = Column::new().add(img(1, 1));
    inner.stack().store(Arc::new(img(1, 1)));
    let mut outer = Row::new().add(inner);
    outer.stack().store(Arc::new(img(1, 1)));

    outer.reset_cache();
    assert!(outer.cached_image().is_none());
    assert!(outer.children()[0].image().is_none());
}

#[test]
fn depth_and_leaf_count() {
    let tree: Cell = Row::new()
        .add(img(1, 1))
        .add(Column::new().add(Row::new().add(img(1, 1)).add(img(1, 1))).add(img(1, 1)))
        .add(img(1, 1))
        .into();
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(Cell::leaf(img(1, 1)).depth(), 1);
    assert_eq!(Cell::from(Row::new()).leaf_count(), 0);
}

#[test]
fn cells_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Cell>();
}
